pub mod formatter;
pub mod report;

pub use formatter::{
    format_outcome, format_question_detail, format_question_list, score_bar, should_use_colors,
};
pub use report::{save_report, Report};
