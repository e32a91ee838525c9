use std::fmt;
use std::str::FromStr;

/// Placeholder for a quantitative column inside a template.
pub const QUANTITATIVE_SLOT: &str = "<A>";
/// Placeholder for a categorical column inside a template.
pub const CATEGORICAL_SLOT: &str = "<B>";
/// Placeholder for the table name inside a template.
pub const TABLE_SLOT: &str = "{table}";

/// A parameterized (description, SQL) pair with up to two substitutable
/// column-name slots. Defined at process start, read-only thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Natural-language pattern shown to the user.
    pub pattern: &'static str,
    /// Matching SQL text with the same placeholders.
    pub sql: &'static str,
}

impl Template {
    /// Whether this template carries column placeholders. Templates without
    /// any instantiate exactly once rather than per column pair.
    pub fn has_placeholders(&self) -> bool {
        self.sql.contains(QUANTITATIVE_SLOT) || self.sql.contains(CATEGORICAL_SLOT)
    }
}

/// Default template library used when no construct is requested.
pub static UNCONSTRAINED: &[Template] = &[
    Template {
        pattern: "Total <A> by <B>",
        sql: "SELECT <B>, SUM(<A>) AS total_<A> FROM {table} GROUP BY <B>",
    },
    Template {
        pattern: "Average <A> by <B>",
        sql: "SELECT <B>, AVG(<A>) AS average_<A> FROM {table} GROUP BY <B>",
    },
    Template {
        pattern: "Count <B>",
        sql: "SELECT <B>, COUNT(*) AS count FROM {table} GROUP BY <B>",
    },
    Template {
        pattern: "Minimum <A> by <B>",
        sql: "SELECT <B>, MIN(<A>) AS min_<A> FROM {table} GROUP BY <B>",
    },
    Template {
        pattern: "Maximum <A> by <B>",
        sql: "SELECT <B>, MAX(<A>) AS max_<A> FROM {table} GROUP BY <B>",
    },
    Template {
        pattern: "Select all records",
        sql: "SELECT * FROM {table}",
    },
    Template {
        pattern: "Distinct values of <B>",
        sql: "SELECT DISTINCT <B> FROM {table}",
    },
];

static GROUP_BY: &[Template] = &[
    Template {
        pattern: "Total <A> by <B>",
        sql: "SELECT <B>, SUM(<A>) AS total_<A> FROM {table} GROUP BY <B>",
    },
    Template {
        pattern: "Count <B>",
        sql: "SELECT <B>, COUNT(*) AS count FROM {table} GROUP BY <B>",
    },
    Template {
        pattern: "Average <A> by <B>",
        sql: "SELECT <B>, AVG(<A>) AS average_<A> FROM {table} GROUP BY <B>",
    },
    Template {
        pattern: "Minimum <A> by <B>",
        sql: "SELECT <B>, MIN(<A>) AS min_<A> FROM {table} GROUP BY <B>",
    },
    Template {
        pattern: "Maximum <A> by <B>",
        sql: "SELECT <B>, MAX(<A>) AS max_<A> FROM {table} GROUP BY <B>",
    },
];

static ORDER_BY: &[Template] = &[
    Template {
        pattern: "Top 5 <B> ordered by <A> descending",
        sql: "SELECT <B>, <A> FROM {table} ORDER BY <A> DESC LIMIT 5",
    },
    Template {
        pattern: "Top 5 <B> ordered by <A> ascending",
        sql: "SELECT <B>, <A> FROM {table} ORDER BY <A> ASC LIMIT 5",
    },
    Template {
        pattern: "All <B> ordered by <A> descending",
        sql: "SELECT <B>, <A> FROM {table} ORDER BY <A> DESC",
    },
];

static HAVING: &[Template] = &[
    Template {
        pattern: "Filter <B> with total <A> greater than 100",
        sql: "SELECT <B>, SUM(<A>) AS total_<A> FROM {table} GROUP BY <B> HAVING total_<A> > 100",
    },
    Template {
        pattern: "Filter <B> with average <A> greater than 50",
        sql: "SELECT <B>, AVG(<A>) AS average_<A> FROM {table} GROUP BY <B> HAVING average_<A> > 50",
    },
    Template {
        pattern: "Filter <B> with count <A> greater than 10",
        sql: "SELECT <B>, COUNT(<A>) AS count_<A> FROM {table} GROUP BY <B> HAVING count_<A> > 10",
    },
];

static WHERE: &[Template] = &[
    Template {
        pattern: "Select rows where <A> > 100",
        sql: "SELECT * FROM {table} WHERE <A> > 100",
    },
    Template {
        pattern: "Select rows where <A> is not null",
        sql: "SELECT * FROM {table} WHERE <A> IS NOT NULL",
    },
    Template {
        pattern: "Select rows where <B> is null",
        sql: "SELECT * FROM {table} WHERE <B> IS NULL",
    },
    Template {
        pattern: "Select rows where <A> between <value1> and <value2>",
        sql: "SELECT * FROM {table} WHERE <A> BETWEEN <value1> AND <value2>",
    },
    Template {
        pattern: "Select rows where <A> like '%<B>%'",
        sql: "SELECT * FROM {table} WHERE <A> LIKE '%<B>%'",
    },
    Template {
        pattern: "Select rows where <A> >= 100 and <A> <= 200",
        sql: "SELECT * FROM {table} WHERE <A> >= 100 AND <A> <= 200",
    },
    Template {
        pattern: "Select rows where <A> in ('<val1>', '<val2>', '<val3>')",
        sql: "SELECT * FROM {table} WHERE <A> IN ('<val1>', '<val2>', '<val3>')",
    },
];

/// Named SQL clause category used to scope sample-query template selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    /// `GROUP BY` aggregation templates.
    GroupBy,
    /// `ORDER BY` sorting templates.
    OrderBy,
    /// `HAVING` post-grouping filter templates.
    Having,
    /// `WHERE` row filter templates.
    Where,
}

impl Construct {
    /// The fixed template library for this construct.
    pub fn templates(self) -> &'static [Template] {
        match self {
            Construct::GroupBy => GROUP_BY,
            Construct::OrderBy => ORDER_BY,
            Construct::Having => HAVING,
            Construct::Where => WHERE,
        }
    }

    /// Short explanation of the construct, shown alongside sample queries.
    pub fn explainer(self) -> &'static str {
        match self {
            Construct::GroupBy => {
                "The group by statement groups rows that have the same values into summary rows, \
                 like 'total' or 'average'. \nIt is often used with aggregate functions like \
                 count(), sum(), avg(), etc."
            }
            Construct::OrderBy => {
                "The order by clause is used to sort the result set by one or more columns. \nBy \
                 default, it sorts in ascending order; use 'desc' to sort in descending order."
            }
            Construct::Having => {
                "The having clause is used to filter the results of a group by query. \nIt is \
                 similar to the where clause but is applied after the grouping operation."
            }
            Construct::Where => {
                "The where clause is used to filter records before any grouping or aggregation \
                 occurs. \nIt limits the results to only those that meet certain conditions."
            }
        }
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Construct::GroupBy => write!(f, "GROUP BY"),
            Construct::OrderBy => write!(f, "ORDER BY"),
            Construct::Having => write!(f, "HAVING"),
            Construct::Where => write!(f, "WHERE"),
        }
    }
}

impl FromStr for Construct {
    type Err = String;

    /// Case-insensitive; the spaceless forms `GROUPBY` / `ORDERBY` are
    /// accepted as synonyms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GROUP BY" | "GROUPBY" => Ok(Construct::GroupBy),
            "ORDER BY" | "ORDERBY" => Ok(Construct::OrderBy),
            "HAVING" => Ok(Construct::Having),
            "WHERE" => Ok(Construct::Where),
            _ => Err(format!("Unknown SQL construct: {s}")),
        }
    }
}
