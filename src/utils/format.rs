use console::style;

use crate::roast::RoastLevel;

pub fn roast_banner(level: RoastLevel) -> String {
    style(format!("[{} roast]", level)).red().bold().to_string()
}

pub fn success(msg: &str) -> String { style(msg).green().to_string() }
pub fn warn(msg: &str) -> String { style(msg).yellow().to_string() }
pub fn error(msg: &str) -> String { style(msg).red().to_string() }
