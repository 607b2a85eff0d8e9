pub mod render;

pub use render::{print_instructions, write_instructions, SQL_FILE_PATH};
