//! Positional edits on a table's ordered column list.
//!
//! Column names stay unique: inserting a column whose name is taken replaces the old one.

use {ast::ColumnPosition, def::ColumnDefinition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    Start,
    /// Right after the named column, or at the end when there is no such column.
    After(String),
    End,
}

impl From<ColumnPosition> for Position {
    fn from(position: ColumnPosition) -> Self {
        match position {
            ColumnPosition::First => Self::Start,
            ColumnPosition::After(name) => Self::After(name.0),
        }
    }
}

pub fn insert(columns: &mut Vec<ColumnDefinition>, column: ColumnDefinition, position: Position) {
    remove(columns, &column.name);

    let index = match position {
        Position::Start => 0,
        Position::After(name) => match columns.iter().position(|col| col.name == name) {
            Some(i) => i + 1,
            None => columns.len(),
        },
        Position::End => columns.len(),
    };

    columns.insert(index, column);
}

/// Removes the column called `name`, if any.
pub fn remove(columns: &mut Vec<ColumnDefinition>, name: &str) -> Option<ColumnDefinition> {
    let index = columns.iter().position(|col| col.name == name)?;

    Some(columns.remove(index))
}

#[cfg(test)]
mod tests {
    use {super::*, def::ScanType};

    fn columns(names: &[&str]) -> Vec<ColumnDefinition> {
        names
            .iter()
            .map(|name| ColumnDefinition::new(*name, "int", ScanType::Int32))
            .collect()
    }

    fn names(columns: &[ColumnDefinition]) -> Vec<&str> {
        columns.iter().map(|col| col.name.as_str()).collect()
    }

    #[test]
    fn insert_positions() {
        let mut cols = columns(&["a", "b", "c"]);

        insert(&mut cols, columns(&["x"]).remove(0), Position::After("a".to_string()));
        assert_eq!(names(&cols), vec!["a", "x", "b", "c"]);

        insert(&mut cols, columns(&["y"]).remove(0), Position::Start);
        assert_eq!(names(&cols), vec!["y", "a", "x", "b", "c"]);

        insert(&mut cols, columns(&["z"]).remove(0), Position::End);
        assert_eq!(names(&cols), vec!["y", "a", "x", "b", "c", "z"]);

        insert(&mut cols, columns(&["w"]).remove(0), Position::After("nope".to_string()));
        assert_eq!(names(&cols), vec!["y", "a", "x", "b", "c", "z", "w"]);
    }

    #[test]
    fn insert_replaces_same_name() {
        let mut cols = columns(&["a", "b", "c"]);
        let b = ColumnDefinition::new("b", "varchar", ScanType::String);

        insert(&mut cols, b.clone(), Position::End);
        assert_eq!(names(&cols), vec!["a", "c", "b"]);
        assert_eq!(cols[2], b);

        // the anchor is looked up after the old column is gone
        insert(&mut cols, columns(&["b"]).remove(0), Position::After("b".to_string()));
        assert_eq!(names(&cols), vec!["a", "c", "b"]);
        assert_eq!(cols[2].scan_type, ScanType::Int32);

        insert(&mut cols, columns(&["c"]).remove(0), Position::After("a".to_string()));
        assert_eq!(names(&cols), vec!["a", "c", "b"]);
    }

    #[test]
    fn remove_by_name() {
        let mut cols = columns(&["a", "b"]);

        assert_eq!(remove(&mut cols, "a").map(|col| col.name), Some("a".to_string()));
        assert_eq!(remove(&mut cols, "a"), None);
        assert_eq!(remove(&mut cols, "B"), None);
        assert_eq!(names(&cols), vec!["b"]);
    }
}
