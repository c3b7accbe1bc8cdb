pub mod csv;
pub mod temp_dir;
