//! Language metadata used by hosts to pick a lexer.

use std::path::Path;

/// Static description of a language a lexer handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageInfo {
    /// Canonical name, e.g. `alba`.
    pub name: &'static str,
    /// Alternative names accepted in lookups.
    pub aliases: &'static [&'static str],
    /// Filename glob patterns (`*` and `?` wildcards).
    pub filenames: &'static [&'static str],
    pub mimetypes: &'static [&'static str],
}

pub const ALBA: LanguageInfo = LanguageInfo {
    name: "alba",
    aliases: &["Alba"],
    filenames: &["*.al", "*.ali"],
    mimetypes: &["text/x-alba"],
};

impl LanguageInfo {
    /// Name and aliases, canonical name first.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }

    /// Case-insensitive match against the name or any alias.
    pub fn matches_name(&self, name: &str) -> bool {
        self.names().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// Match the final path component against the filename patterns.
    pub fn matches_filename(&self, path: &str) -> bool {
        let Some(file_name) = Path::new(path).file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.filenames
            .iter()
            .any(|pattern| glob_match(pattern.as_bytes(), file_name.as_bytes()))
    }

    pub fn matches_mimetype(&self, mimetype: &str) -> bool {
        self.mimetypes
            .iter()
            .any(|m| m.eq_ignore_ascii_case(mimetype))
    }
}

/// Shell-style match: `*` matches any run of bytes, `?` exactly one byte.
/// Case-sensitive. Backtracks only to the most recent `*`.
fn glob_match(pattern: &[u8], name: &[u8]) -> bool {
    let (mut p, mut n) = (0, 0);
    let mut star: Option<(usize, usize)> = None;
    while n < name.len() {
        match pattern.get(p) {
            Some(b'*') => {
                star = Some((p, n));
                p += 1;
            }
            Some(&c) if c == b'?' || c == name[n] => {
                p += 1;
                n += 1;
            }
            _ => match star {
                Some((star_p, star_n)) => {
                    p = star_p + 1;
                    n = star_n + 1;
                    star = Some((star_p, star_n + 1));
                }
                None => return false,
            },
        }
    }
    pattern[p..].iter().all(|&c| c == b'*')
}

#[cfg(test)]
mod tests;
