//! Totality and order of the diagnostic name tables

use contract_ast::{DdlKind, ErrorKind, ExpKind, OpKind, SqlKind, StmtKind, TypeKind};
use std::collections::HashSet;

/// Asserts one non-empty, unique name per variant, in ordinal order
macro_rules! check_table {
    ($kind:ty, $count:expr) => {{
        assert_eq!(<$kind>::COUNT, $count);
        assert_eq!(<$kind>::ALL.len(), <$kind>::COUNT);
        assert_eq!(<$kind>::NAMES.len(), <$kind>::COUNT);

        let mut seen = HashSet::new();
        for (ordinal, kind) in <$kind>::ALL.iter().enumerate() {
            let name = kind.name();
            assert!(!name.is_empty());
            assert!(seen.insert(name), "duplicate name {}", name);
            assert_eq!(kind.ordinal(), ordinal);
            assert_eq!(<$kind>::NAMES[ordinal], name);
            assert_eq!(<$kind>::from_ordinal(ordinal).unwrap(), *kind);
            assert_eq!(kind.to_string(), name);
        }

        let err = <$kind>::from_ordinal(<$kind>::COUNT).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidOrdinal);
    }};
}

#[test]
fn test_expression_kind_table() {
    check_table!(ExpKind, 11);
    assert_eq!(
        ExpKind::NAMES,
        &["NULL", "ID", "LIT", "TYPE", "ARRAY", "OP", "ACCESS", "CALL", "SQL", "COND", "TUPLE"]
    );
}

#[test]
fn test_operator_table() {
    check_table!(OpKind, 22);
    assert_eq!(OpKind::Assign.name(), "ASSIGN");
    assert_eq!(OpKind::BitXor.name(), "BIT_XOR");
    assert_eq!(OpKind::LShift.name(), "LSHIFT");
    assert_eq!(OpKind::Not.name(), "NOT");
}

#[test]
fn test_sql_kind_table() {
    check_table!(SqlKind, 4);
    assert_eq!(SqlKind::NAMES, &["QUERY", "INSERT", "UPDATE", "DELETE"]);
}

#[test]
fn test_statement_and_ddl_tables() {
    check_table!(StmtKind, 11);
    check_table!(DdlKind, 4);
    assert_eq!(
        DdlKind::NAMES,
        &["CREATE_TBL", "DROP_TBL", "CREATE_IDX", "DROP_IDX"]
    );
}

#[test]
fn test_type_table() {
    check_table!(TypeKind, 19);
    assert_eq!(TypeKind::name_of(0).unwrap(), "none");
    assert!(TypeKind::name_of(99).is_err());
}
