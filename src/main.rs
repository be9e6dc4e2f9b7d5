use std::env;
use std::process;

use shearsort::{read_matrix_file, sort_matrix_timed, write_matrix_file};

fn usage() -> ! {
    eprintln!("Expected input: shearsort <input_file> <output_file> [--procs P]");
    process::exit(1);
}

/// Largest worker count that is at most `cores` and divides `n`.
/// Always at least 1.
fn default_procs(n: usize, cores: usize) -> usize {
    let mut p = cores.min(n.max(1));
    while p > 1 && n % p != 0 {
        p -= 1;
    }
    p
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut input = None;
    let mut output = None;
    let mut procs = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--procs" => {
                i += 1;
                let value = args.get(i).unwrap_or_else(|| usage());
                match value.parse::<usize>() {
                    Ok(p) if p > 0 => procs = Some(p),
                    _ => usage(),
                }
            }
            arg if input.is_none() => input = Some(arg.to_string()),
            arg if output.is_none() => output = Some(arg.to_string()),
            _ => usage(),
        }
        i += 1;
    }

    let (input, output) = match (input, output) {
        (Some(i), Some(o)) => (i, o),
        _ => usage(),
    };

    let matrix = match read_matrix_file(&input) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let n = matrix.n;
    let procs = procs.unwrap_or_else(|| default_procs(n, num_cpus::get()));

    let (sorted, elapsed) = match sort_matrix_timed(matrix, procs) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("Sorted {}x{} matrix on {} workers", n, n, procs);
    println!("Execution time {:.6}", elapsed.as_secs_f64());

    if let Err(e) = write_matrix_file(&output, &sorted) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
