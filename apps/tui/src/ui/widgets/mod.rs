pub mod badge;
pub mod charts;
pub mod globe;
pub mod popup;
pub mod tables;
