pub mod sine;
pub mod table_loader;
pub mod table_writer;
