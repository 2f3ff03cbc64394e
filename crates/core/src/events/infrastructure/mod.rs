pub mod json_event_reader;
pub mod match_directory;
