// One row of an uploaded spreadsheet export, keyed by header name

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportRow {
    cells: HashMap<String, String>,
}

impl ImportRow {
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells.get(header).map(String::as_str)
    }

    /// Value of the first header in `headers` that is present in the row.
    pub fn first_of(&self, headers: &[&str]) -> Option<&str> {
        headers.iter().find_map(|header| self.get(header))
    }
}

impl<K, V> FromIterator<(K, V)> for ImportRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
