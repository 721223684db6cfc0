/// Characters used to render a grid as plain text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatConfig {
    pub alive: char,
    pub dead: char,
    /// Separator between columns; `None` writes cells back to back.
    pub delimiter: Option<char>,
    pub alive_obstacle: char,
    pub dead_obstacle: char,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            alive: 'O',
            dead: '.',
            delimiter: None,
            alive_obstacle: 'x',
            dead_obstacle: 'o',
        }
    }
}

impl FormatConfig {
    pub fn new(alive: char, dead: char, delimiter: Option<char>) -> Self {
        Self {
            alive,
            dead,
            delimiter,
            ..Default::default()
        }
    }

    /// Accepts the `'\0'` convention for "no delimiter".
    pub fn from_chars(alive: char, dead: char, delimiter: char) -> Self {
        Self::new(alive, dead, Some(delimiter).filter(|&c| c != '\0'))
    }

    pub fn with_obstacles(mut self, alive_obstacle: char, dead_obstacle: char) -> Self {
        self.alive_obstacle = alive_obstacle;
        self.dead_obstacle = dead_obstacle;
        self
    }

    pub(crate) fn symbol(&self, alive: bool, obstacle: bool) -> char {
        match (obstacle, alive) {
            (false, true) => self.alive,
            (false, false) => self.dead,
            (true, true) => self.alive_obstacle,
            (true, false) => self.dead_obstacle,
        }
    }

    /// Renders `rows x cols` cells, one line per row.
    pub(crate) fn render(
        &self,
        rows: usize,
        cols: usize,
        cell: impl Fn(usize, usize) -> (bool, bool),
    ) -> String {
        let width = if self.delimiter.is_some() { 2 * cols } else { cols + 1 };
        let mut result = String::with_capacity(rows * width);
        for r in 0..rows {
            for c in 0..cols {
                if c != 0 {
                    if let Some(d) = self.delimiter {
                        result.push(d);
                    }
                }
                let (alive, obstacle) = cell(r, c);
                result.push(self.symbol(alive, obstacle));
            }
            result.push('\n');
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nul_delimiter_means_none() {
        let f = FormatConfig::from_chars('X', 'Y', '\0');
        assert_eq!(f.delimiter, None);
        let f = FormatConfig::from_chars('X', 'Y', 'Z');
        assert_eq!(f.delimiter, Some('Z'));
    }

    #[test]
    fn render_with_and_without_delimiter() {
        let cell = |r: usize, c: usize| (r == c, false);
        assert_eq!(FormatConfig::default().render(2, 3, cell), "O..\n.O.\n");
        assert_eq!(
            FormatConfig::new('1', '0', Some(' ')).render(2, 3, cell),
            "1 0 0\n0 1 0\n"
        );
    }

    #[test]
    fn render_obstacles() {
        let f = FormatConfig::default();
        let s = f.render(1, 4, |_, c| (c % 2 == 0, c >= 2));
        assert_eq!(s, "O.xo\n");
    }
}
