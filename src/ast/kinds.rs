//! Node discriminants and their diagnostic name tables
//!
//! Every enumeration here is declared through `name_table!`, which emits the enum, its `ALL` and
//! `NAMES` tables and the lookups from one variant list. A table therefore always has exactly one
//! name per variant, in the same ordinal order.

use crate::error::{AstError, ErrorKind, Result};

macro_rules! name_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize)]
        $vis enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every variant, in ordinal order
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Diagnostic names, indexed by ordinal
            pub const NAMES: &'static [&'static str] = &[$($text,)+];

            pub const COUNT: usize = Self::ALL.len();

            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            pub fn ordinal(self) -> usize {
                self as usize
            }

            /// Looks up a discriminant by ordinal; out-of-range values are internal defects
            pub fn from_ordinal(ordinal: usize) -> Result<Self> {
                Self::ALL.get(ordinal).copied().ok_or_else(|| {
                    AstError::new(
                        ErrorKind::InvalidOrdinal,
                        format!(
                            "{} ordinal {} is outside the name table (0..{})",
                            stringify!($name),
                            ordinal,
                            Self::COUNT
                        ),
                    )
                })
            }

            /// Name lookup by raw ordinal, as used by tooling that stores discriminants as integers
            pub fn name_of(ordinal: usize) -> Result<&'static str> {
                Self::from_ordinal(ordinal).map(Self::name)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

name_table! {
    /// Expression discriminant
    pub enum ExpKind {
        Null => "NULL",
        Id => "ID",
        Lit => "LIT",
        Type => "TYPE",
        Array => "ARRAY",
        Op => "OP",
        Access => "ACCESS",
        Call => "CALL",
        Sql => "SQL",
        Ternary => "COND",
        Tuple => "TUPLE",
    }
}

name_table! {
    /// Operator of an OP expression; INC, DEC and NOT are unary
    pub enum OpKind {
        Assign => "ASSIGN",
        Add => "ADD",
        Sub => "SUB",
        Mul => "MUL",
        Div => "DIV",
        Mod => "MOD",
        And => "AND",
        Or => "OR",
        BitAnd => "BIT_AND",
        BitOr => "BIT_OR",
        BitXor => "BIT_XOR",
        Eq => "EQ",
        Ne => "NE",
        Lt => "LT",
        Gt => "GT",
        Le => "LE",
        Ge => "GE",
        RShift => "RSHIFT",
        LShift => "LSHIFT",
        Inc => "INC",
        Dec => "DEC",
        Not => "NOT",
    }
}

impl OpKind {
    pub fn is_unary(self) -> bool {
        matches!(self, OpKind::Inc | OpKind::Dec | OpKind::Not)
    }

    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            OpKind::Eq | OpKind::Ne | OpKind::Lt | OpKind::Gt | OpKind::Le | OpKind::Ge
        )
    }
}

name_table! {
    /// Kind of an embedded SQL (DML) fragment
    pub enum SqlKind {
        Query => "QUERY",
        Insert => "INSERT",
        Update => "UPDATE",
        Delete => "DELETE",
    }
}

name_table! {
    /// Statement discriminant
    pub enum StmtKind {
        Null => "NULL",
        Exp => "EXP",
        If => "IF",
        For => "FOR",
        Switch => "SWITCH",
        Case => "CASE",
        Continue => "CONTINUE",
        Break => "BREAK",
        Return => "RETURN",
        Ddl => "DDL",
        Blk => "BLK",
    }
}

name_table! {
    /// Kind of an embedded DDL statement
    pub enum DdlKind {
        CreateTbl => "CREATE_TBL",
        DropTbl => "DROP_TBL",
        CreateIdx => "CREATE_IDX",
        DropIdx => "DROP_IDX",
    }
}

name_table! {
    /// Base type tag of a TYPE expression, also the resolved type in expression metadata
    #[derive(Default)]
    pub enum TypeKind {
        #[default]
        None => "none",
        Bool => "bool",
        Byte => "byte",
        Int8 => "int8",
        Uint8 => "uint8",
        Int16 => "int16",
        Uint16 => "uint16",
        Int32 => "int32",
        Uint32 => "uint32",
        Int64 => "int64",
        Uint64 => "uint64",
        Float => "float",
        Double => "double",
        String => "string",
        Account => "account",
        Struct => "struct",
        Map => "map",
        Object => "object",
        Void => "void",
    }
}

impl TypeKind {
    pub fn is_none(self) -> bool {
        self == TypeKind::None
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            TypeKind::Byte
                | TypeKind::Int8
                | TypeKind::Uint8
                | TypeKind::Int16
                | TypeKind::Uint16
                | TypeKind::Int32
                | TypeKind::Uint32
                | TypeKind::Int64
                | TypeKind::Uint64
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_follow_declaration_order() {
        for (i, kind) in OpKind::ALL.iter().enumerate() {
            assert_eq!(kind.ordinal(), i);
            assert_eq!(OpKind::NAMES[i], kind.name());
        }
        assert_eq!(StmtKind::from_ordinal(2).unwrap(), StmtKind::If);
    }

    #[test]
    fn test_out_of_range_ordinal_is_internal_error() {
        let err = SqlKind::from_ordinal(SqlKind::COUNT).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidOrdinal);
        assert!(err.is_internal());
        assert!(err.message.contains("SqlKind ordinal 4"));
    }

    #[test]
    fn test_unary_operators() {
        let unary: Vec<_> = OpKind::ALL.iter().filter(|op| op.is_unary()).collect();
        assert_eq!(unary, vec![&OpKind::Inc, &OpKind::Dec, &OpKind::Not]);
        assert!(OpKind::Ge.is_comparison());
        assert!(!OpKind::LShift.is_comparison());
    }

    #[test]
    fn test_type_kind_default_is_none() {
        assert!(TypeKind::default().is_none());
        assert!(TypeKind::Uint16.is_integer());
        assert!(!TypeKind::Double.is_integer());
    }
}
