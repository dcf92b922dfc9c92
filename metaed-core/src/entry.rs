/// One `key: values` pair read from a metadata block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// Lower-cased key text.
    pub key: String,
    /// Values in the order they were written. Never empty for pairs
    /// produced by the tokenizer.
    pub values: Vec<String>,
    /// 1-based line number of the key line.
    pub line: usize,
}

impl Pair {
    pub fn new(key: impl Into<String>, values: Vec<String>, line: usize) -> Self {
        Self {
            key: key.into(),
            values,
            line,
        }
    }

    /// First value, if any.
    pub fn first(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}

/// A single parsed metadata block, before any schema is applied.
///
/// Pairs keep their encounter order and duplicate keys are kept as separate
/// pairs; deciding what a duplicate means is up to the mapper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub pairs: Vec<Pair>,
    /// Line number of the block's first line, for diagnostics.
    pub source_position: usize,
}

impl Entry {
    pub fn new(source_position: usize) -> Self {
        Self {
            pairs: Vec::new(),
            source_position,
        }
    }

    /// Append a pair. Pairs without values are dropped, since an empty value
    /// list means the key is absent.
    pub fn push(&mut self, pair: Pair) {
        if !pair.values.is_empty() {
            self.pairs.push(pair);
        }
    }

    /// Values of the first pair with this key (case-insensitive).
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.get_all(key).next().map(|p| p.values.as_slice())
    }

    /// All pairs with this key, in encounter order.
    pub fn get_all<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a Pair> + 'a {
        let key = key.to_lowercase();
        self.pairs.iter().filter(move |p| p.key == key)
    }

    /// Distinct keys in order of first appearance.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for pair in &self.pairs {
            if !keys.contains(&pair.key.as_str()) {
                keys.push(&pair.key);
            }
        }
        keys
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
