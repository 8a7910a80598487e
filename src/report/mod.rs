pub mod report;

pub use report::{evaluate, render_report, SampleReport};
