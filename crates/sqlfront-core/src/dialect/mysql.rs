//! MySQL word tables.
//!
//! MySQL keeps the ANSI types, functions and synonyms and adds its own.
//! Its reserved list is its own: words such as `count` or `day` are plain
//! identifiers here.

use super::DialectTables;

pub(super) static TABLES: DialectTables = DialectTables {
    reserved: RESERVED,
    types: TYPES,
    functions: FUNCTIONS,
    operators: OPERATORS,
    commands: super::ansi::COMMANDS,
    synonyms: SYNONYMS,
};

const RESERVED: &[&str] = &[
    "accessible", "add", "all", "alter", "analyze", "and", "as", "asc", "asensitive", "before",
    "between", "bigint", "binary", "blob", "both", "by", "call", "cascade", "case", "change",
    "char", "character", "check", "collate", "column", "condition", "constraint", "continue",
    "convert", "create", "cross", "current_date", "current_time", "current_timestamp",
    "current_user", "cursor", "database", "databases", "day_hour", "day_microsecond",
    "day_minute", "day_second", "dec", "decimal", "declare", "default", "delayed", "delete",
    "desc", "describe", "deterministic", "distinct", "distinctrow", "div", "double", "drop",
    "dual", "each", "else", "elseif", "enclosed", "escaped", "exists", "exit", "explain",
    "false", "fetch", "float", "float4", "float8", "for", "force", "foreign", "from", "fulltext",
    "grant", "group", "having", "high_priority", "hour_microsecond", "hour_minute",
    "hour_second", "if", "ignore", "in", "index", "infile", "inner", "inout", "insensitive",
    "insert", "int", "int1", "int2", "int3", "int4", "int8", "integer", "interval", "into", "is",
    "iterate", "join", "key", "keys", "kill", "leading", "leave", "left", "like", "limit",
    "linear", "lines", "load", "localtime", "localtimestamp", "lock", "long", "longblob",
    "longtext", "loop", "low_priority", "match", "mediumblob", "mediumint", "mediumtext",
    "middleint", "minute_microsecond", "minute_second", "mod", "modifies", "natural", "not",
    "no_write_to_binlog", "null", "numeric", "on", "optimize", "option", "optionally", "or",
    "order", "out", "outer", "outfile", "precision", "primary", "procedure", "purge", "range",
    "read", "reads", "real", "references", "regexp", "release", "rename", "repeat", "replace",
    "require", "restrict", "return", "revoke", "right", "rlike", "schema", "schemas",
    "second_microsecond", "select", "sensitive", "separator", "sequence", "set", "show",
    "smallint", "spatial", "specific", "sql", "sqlexception", "sqlstate", "sqlwarning",
    "sql_big_result", "sql_calc_found_rows", "sql_small_result", "ssl", "starting",
    "straight_join", "table", "terminated", "then", "tinyblob", "tinyint", "tinytext", "to",
    "trailing", "trigger", "true", "undo", "union", "unique", "unlock", "unsigned", "update",
    "usage", "use", "using", "utc_date", "utc_time", "utc_timestamp", "values", "varbinary",
    "varchar", "varcharacter", "varying", "when", "where", "while", "with", "write", "xor",
    "year_month", "zerofill",
];

const TYPES: &[&str] = &[
    "char", "character", "varchar", "nchar", "bit", "numeric", "decimal", "dec", "integer", "int",
    "smallint", "float", "real", "double", "date", "datetime", "time", "timestamp", "interval",
    "bool", "boolean", "set", "enum", "text", "tinyint", "mediumint", "bigint", "year",
    "tinytext", "mediumtext", "longtext", "tinyblob", "blob", "mediumblob", "longblob", "binary",
    "varbinary",
];

const FUNCTIONS: &[&str] = &[
    "avg", "count", "max", "min", "sum", "nextval", "currval", "concat", "now", "curdate",
    "ifnull", "length", "lower", "upper", "md5", "rand", "unix_timestamp",
];

const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "^", "%", "=", "<>", "!=", "<=>", "<", "<=", ">", ">=", "like", "clike",
    "slike", "regexp", "rlike", "not", "is", "in", "between", "and", "or", "xor", "div", "mod",
];

const SYNONYMS: &[(&str, &str)] = &[
    ("decimal", "numeric"),
    ("dec", "numeric"),
    ("numeric", "numeric"),
    ("float", "float"),
    ("real", "real"),
    ("double", "float"),
    ("double precision", "float"),
    ("int", "int"),
    ("integer", "int"),
    ("tinyint", "tinyint"),
    ("smallint", "smallint"),
    ("mediumint", "mediumint"),
    ("bigint", "bigint"),
    ("interval", "interval"),
    ("date", "date"),
    ("datetime", "datetime"),
    ("time", "time"),
    ("timestamp", "time"),
    ("year", "year"),
    ("bool", "boolean"),
    ("boolean", "boolean"),
    ("bit", "bit"),
    ("set", "set"),
    ("enum", "enum"),
    ("text", "text"),
    ("tinytext", "text"),
    ("mediumtext", "text"),
    ("longtext", "text"),
    ("blob", "blob"),
    ("tinyblob", "blob"),
    ("mediumblob", "blob"),
    ("longblob", "blob"),
    ("binary", "char"),
    ("varbinary", "varchar"),
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
