//! ANSI SQL-92 word tables.

use super::DialectTables;

pub(super) static TABLES: DialectTables = DialectTables {
    reserved: RESERVED,
    types: TYPES,
    functions: FUNCTIONS,
    operators: OPERATORS,
    commands: COMMANDS,
    synonyms: SYNONYMS,
};

/// SQL-92 reserved words, plus `index`, `limit` and `sequence`, which the
/// grammar treats as keywords.
pub(super) const RESERVED: &[&str] = &[
    "absolute", "action", "add", "all", "allocate", "alter", "and", "any", "are", "as", "asc",
    "assertion", "at", "authorization", "avg", "begin", "between", "bit", "bit_length", "both",
    "by", "cascade", "cascaded", "case", "cast", "catalog", "char", "character", "char_length",
    "character_length", "check", "close", "coalesce", "collate", "collation", "column", "commit",
    "connect", "connection", "constraint", "constraints", "continue", "convert", "corresponding",
    "count", "create", "cross", "current", "current_date", "current_time", "current_timestamp",
    "current_user", "cursor", "date", "day", "deallocate", "dec", "decimal", "declare", "default",
    "deferrable", "deferred", "delete", "desc", "describe", "descriptor", "diagnostics",
    "disconnect", "distinct", "domain", "double", "drop", "else", "end", "end-exec", "escape",
    "except", "exception", "exec", "execute", "exists", "external", "extract", "false", "fetch",
    "first", "float", "for", "foreign", "found", "from", "full", "get", "global", "go", "goto",
    "grant", "group", "having", "hour", "identity", "immediate", "in", "index", "indicator",
    "initially", "inner", "input", "insensitive", "insert", "int", "integer", "intersect",
    "interval", "into", "is", "isolation", "join", "key", "language", "last", "leading", "left",
    "level", "like", "limit", "local", "lower", "match", "max", "min", "minute", "module", "month",
    "names", "national", "natural", "nchar", "next", "no", "not", "null", "nullif", "numeric",
    "octet_length", "of", "on", "only", "open", "option", "or", "order", "outer", "output",
    "overlaps", "pad", "partial", "position", "precision", "prepare", "preserve", "primary",
    "prior", "privileges", "procedure", "public", "read", "real", "references", "relative",
    "restrict", "revoke", "right", "rollback", "rows", "schema", "scroll", "second", "section",
    "select", "sequence", "session", "session_user", "set", "size", "smallint", "some", "space",
    "sql", "sqlcode", "sqlerror", "sqlstate", "substring", "sum", "system_user", "table",
    "temporary", "then", "time", "timestamp", "timezone_hour", "timezone_minute", "to",
    "trailing", "transaction", "translate", "translation", "trim", "true", "union", "unique",
    "unknown", "update", "upper", "usage", "user", "using", "value", "values", "varchar",
    "varying", "view", "when", "whenever", "where", "with", "work", "write", "year", "zone",
];

pub(super) const TYPES: &[&str] = &[
    "char", "character", "varchar", "nchar", "bit", "numeric", "decimal", "dec", "integer", "int",
    "smallint", "float", "real", "double", "date", "datetime", "time", "timestamp", "interval",
    "bool", "boolean", "set", "enum", "text",
];

pub(super) const FUNCTIONS: &[&str] = &[
    "avg", "count", "max", "min", "sum", "nextval", "currval", "concat",
];

pub(super) const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "^", "=", "<>", "!=", "<", "<=", ">", ">=", "like", "clike", "slike",
    "not", "is", "in", "between", "and", "or",
];

pub(super) const COMMANDS: &[&str] = &[
    "alter", "create", "drop", "select", "delete", "insert", "update",
];

pub(super) const SYNONYMS: &[(&str, &str)] = &[
    ("decimal", "numeric"),
    ("dec", "numeric"),
    ("numeric", "numeric"),
    ("float", "float"),
    ("real", "real"),
    ("double", "float"),
    ("double precision", "float"),
    ("int", "int"),
    ("integer", "int"),
    ("smallint", "smallint"),
    ("interval", "interval"),
    ("date", "date"),
    ("datetime", "datetime"),
    ("time", "time"),
    ("timestamp", "time"),
    ("bool", "boolean"),
    ("boolean", "boolean"),
    ("bit", "bit"),
    ("set", "set"),
    ("enum", "enum"),
    ("text", "text"),
    ("char", "char"),
    ("character", "char"),
    ("nchar", "char"),
    ("varchar", "varchar"),
    ("char varying", "varchar"),
    ("character varying", "varchar"),
    ("asc", "asc"),
    ("ascending", "asc"),
    ("desc", "desc"),
    ("descending", "desc"),
];
