pub mod clean_duplicates;
