/// Splits `src` on `\n`, `\r\n` and lone `\r`, the way `BufferedReader::readLine()`
/// does. A trailing line ending does not produce an empty last line.
#[inline]
pub fn split_lines(src: &str) -> LineSplitter<'_> {
    LineSplitter::new(src)
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineSplitter<'a> {
    rest: &'a str,
}

impl<'a> LineSplitter<'a> {
    #[inline]
    pub fn new(src: &'a str) -> Self {
        Self { rest: src }
    }
}

impl<'a> Iterator for LineSplitter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(index) = self.rest.find(['\n', '\r']) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..index];
        let tail = &self.rest[index..];
        self.rest = if tail.starts_with("\r\n") {
            &tail[2..]
        } else {
            &tail[1..]
        };

        Some(line)
    }
}
