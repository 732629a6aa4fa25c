use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use regex::Regex;

use crate::shared::error::{ScaffoldError, ScaffoldResult};

/// Read the module path declared in `<root>/go.mod`, if the file exists
pub fn module_path<P: AsRef<Path>>(root: P) -> ScaffoldResult<Option<String>> {
    let go_mod = root.as_ref().join("go.mod");
    let content = match fs::read_to_string(&go_mod) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ScaffoldError::io(&go_mod, e)),
    };

    let re = Regex::new(r#"(?m)^\s*module\s+"?([^\s"]+)"?"#)?;
    Ok(re.captures(&content).map(|caps| caps[1].to_string()))
}
