//! Environment table: user-settable shell variables plus reserved specials.

use std::collections::HashMap;

pub const READONLY_VARS: &[&str] = &["PWD", "HOME", "SHELL"];

#[derive(Default)]
pub struct EnvTable {
    vars: HashMap<String, String>,
    last_exit_code: i32,
}

impl EnvTable {
    pub fn new(home: &str) -> Self {
        let mut vars = HashMap::new();
        vars.insert("HOME".to_string(), home.to_string());
        vars.insert("PWD".to_string(), home.to_string());
        vars.insert("SHELL".to_string(), "/bin/vsh".to_string());
        EnvTable { vars, last_exit_code: 0 }
    }

    pub fn is_readonly(name: &str) -> bool {
        READONLY_VARS.contains(&name)
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<(), String> {
        if Self::is_readonly(name) {
            return Err(format!("{name}: readonly variable"));
        }
        self.vars.insert(name.to_string(), value.to_string());
        Ok(())
    }

    /// Used internally by the executor, bypassing the readonly check, to
    /// update `PWD` after a successful `cd`.
    pub fn set_pwd(&mut self, pwd: &str) {
        self.vars.insert("PWD".to_string(), pwd.to_string());
    }

    pub fn unset(&mut self, name: &str) -> Result<(), String> {
        if Self::is_readonly(name) {
            return Err(format!("{name}: readonly variable"));
        }
        self.vars.remove(name);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(|s| s.as_str())
    }

    pub fn set_last_exit_code(&mut self, code: i32) {
        self.last_exit_code = code;
    }

    pub fn last_exit_code(&self) -> i32 {
        self.last_exit_code
    }

    pub fn list(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        entries.sort_by_key(|(k, _)| *k);
        entries
    }

    /// Replace `$NAME` and `${NAME}` occurrences with their current value
    /// (missing variables substitute to empty). `$?` expands to the last
    /// exit code. Operates on an already-tokenised argument — never
    /// reintroduces word boundaries.
    pub fn substitute(&self, text: &str) -> String {
        let mut result = String::new();
        let chars: Vec<char> = text.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            if chars[i] == '$' && i + 1 < chars.len() {
                if chars[i + 1] == '?' {
                    result.push_str(&self.last_exit_code.to_string());
                    i += 2;
                    continue;
                }
                if chars[i + 1] == '{' {
                    if let Some(end) = chars[i + 2..].iter().position(|&c| c == '}') {
                        let name: String = chars[i + 2..i + 2 + end].iter().collect();
                        result.push_str(self.get(&name).unwrap_or(""));
                        i += 2 + end + 1;
                        continue;
                    }
                }
                if chars[i + 1].is_ascii_alphabetic() || chars[i + 1] == '_' {
                    let mut j = i + 1;
                    while j < chars.len() && (chars[j].is_ascii_alphanumeric() || chars[j] == '_') {
                        j += 1;
                    }
                    let name: String = chars[i + 1..j].iter().collect();
                    result.push_str(self.get(&name).unwrap_or(""));
                    i = j;
                    continue;
                }
            }
            result.push(chars[i]);
            i += 1;
        }
        result
    }
}
