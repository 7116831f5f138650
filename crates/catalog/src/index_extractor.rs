use {
    ast::{ConstraintKind, TableConstraint},
    def::IndexDefinition,
};

/// Key constraints become indexes in declaration order, foreign keys and checks are skipped.
pub fn extract_indexes(table_name: &str, constraints: &[TableConstraint]) -> Vec<IndexDefinition> {
    constraints
        .iter()
        .filter_map(|constraint| {
            let (is_primary_key, is_unique) = match constraint.kind {
                ConstraintKind::PrimaryKey => (true, false),
                ConstraintKind::Unique => (false, true),
                ConstraintKind::Index | ConstraintKind::Fulltext => (false, false),
                ConstraintKind::ForeignKey { .. } | ConstraintKind::Check(_) => return None,
            };

            Some(IndexDefinition {
                table_name: table_name.to_string(),
                name: constraint
                    .name
                    .as_ref()
                    .map(|name| name.0.clone())
                    .unwrap_or_default(),
                columns: constraint.columns.iter().map(|col| col.0.clone()).collect(),
                is_primary_key,
                is_unique,
            })
        })
        .collect()
}
