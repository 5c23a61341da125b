/// Sequential generator for the fabricated record identifiers used across
/// the back office (RCP001, TXN002, ...). There is no uniqueness source
/// beyond the counter; ids are display artifacts, not keys with meaning.
#[derive(Debug, Clone)]
pub struct IdSequence {
    prefix: &'static str,
    width: usize,
    next: u64,
}

impl IdSequence {
    pub fn new(prefix: &'static str, width: usize) -> Self {
        Self {
            prefix,
            width,
            next: 1,
        }
    }

    /// Resume numbering after seeded records
    pub fn starting_at(prefix: &'static str, width: usize, next: u64) -> Self {
        Self {
            prefix,
            width,
            next,
        }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}{:0width$}", self.prefix, self.next, width = self.width);
        self.next += 1;
        id
    }

    pub fn peek(&self) -> u64 {
        self.next
    }
}
