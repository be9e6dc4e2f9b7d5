// Matrix storage and I/O

pub mod block;
pub mod dense;
pub mod io;

pub use block::RowBlock;
pub use dense::Matrix;
pub use io::{read_matrix, read_matrix_file, write_matrix, write_matrix_file};
