mod error;
mod render;
mod scripts;


pub use {
    error::{Error, Result},
    render::{render, Format},
    scripts::{collect_scripts, replay, select_tables},
};
