pub mod railway_file;
