pub mod keyword_filter;
