//! Built-in drill: five marketplace questions over the `orders` / `returns` /
//! `customers` schema.

use crate::model::{Difficulty, Question, QuestionBank, QuestionId, SchemaCatalog, SchemaKey};

pub const MAIN_SCHEMA: &str = "main";

const MAIN_SCHEMA_HTML: &str = r#"
<div class="schema-table">
    <div class="schema-table-name">orders</div>
    <div class="schema-column">order_id (PK)</div>
    <div class="schema-column">customer_id (FK)</div>
    <div class="schema-column">product_id (FK)</div>
    <div class="schema-column">order_date <span class="schema-note">// YYYY-MM-DD</span></div>
    <div class="schema-column">value <span class="schema-note">// Float</span></div>
</div>
<div class="schema-table">
    <div class="schema-table-name">returns</div>
    <div class="schema-column">order_id (PK)</div>
    <div class="schema-column">return_reason</div>
</div>
<div class="schema-table">
    <div class="schema-table-name">customers</div>
    <div class="schema-column">customer_id (PK)</div>
    <div class="schema-column">first_name</div>
    <div class="schema-column">last_name</div>
    <div class="schema-column">signup_date <span class="schema-note">// YYYY-MM-DD</span></div>
</div>
"#;

#[must_use]
pub fn builtin_schemas() -> SchemaCatalog {
    SchemaCatalog::new().with_schema(
        SchemaKey::new(MAIN_SCHEMA),
        MAIN_SCHEMA_HTML.trim(),
        ["customers", "orders", "returns"],
    )
}

#[must_use]
pub fn builtin_questions() -> Vec<Question> {
    let main = || SchemaKey::new(MAIN_SCHEMA);
    vec![
        Question {
            id: QuestionId::new(1),
            difficulty: Difficulty::WarmUp,
            title: "Basic Filtering & Sorting".into(),
            description: "Retrieve all columns from the `orders` table for orders with a value \
                greater than $500, ordered by the `order_date` from newest to oldest."
                .into(),
            schema_key: main(),
            solution: "SELECT * \nFROM orders \nWHERE value > 500 \nORDER BY order_date DESC;"
                .into(),
            logic: "1. <strong>Filter:</strong> <code>WHERE value > 500</code> removes low value \
                orders.<br>2. <strong>Sort:</strong> <code>ORDER BY ... DESC</code> puts the most \
                recent dates at the top."
                .into(),
        },
        Question {
            id: QuestionId::new(2),
            difficulty: Difficulty::Intermediate,
            title: "Joining Returned Orders".into(),
            description: "We only want to see orders that were returned. Write a query to select \
                the `order_id` and `value` for all returned orders."
                .into(),
            schema_key: main(),
            solution: "SELECT o.order_id, o.value \nFROM orders o \nJOIN returns r ON o.order_id = r.order_id;"
                .into(),
            logic: "1. <strong>JOIN:</strong> An <code>INNER JOIN</code> (or just JOIN) only keeps \
                rows that exist in BOTH tables.<br>2. Since we only want returned orders, joining \
                <code>orders</code> with <code>returns</code> automatically filters out \
                non-returned orders."
                .into(),
        },
        Question {
            id: QuestionId::new(3),
            difficulty: Difficulty::ExamLevel,
            title: "The 'Last 15 Returned' (Target Question 1)".into(),
            description: "<strong>Goal:</strong> Retrieve `order_id`, `customer_id`, and \
                `product_id`.<br><strong>Filter:</strong> Only returned orders.<br>\
                <strong>Sort:</strong> Latest `order_date` first. If dates are same, sort by \
                `value` (highest first).<br><strong>Limit:</strong> Top 15 rows."
                .into(),
            schema_key: main(),
            solution: "SELECT \n  o.order_id, \n  o.customer_id, \n  o.product_id\nFROM orders o\n\
                JOIN returns r \n  ON o.order_id = r.order_id\nORDER BY \n  o.order_date DESC, \n  \
                o.value DESC\nLIMIT 15;"
                .into(),
            logic: "1. <strong>JOIN:</strong> Filter for returns.<br>2. <strong>ORDER BY X DESC, \
                Y DESC:</strong> This is the tie-breaker. It sorts by Date first. If Date is \
                equal, it looks at Value.<br>3. <strong>LIMIT 15:</strong> Cuts the result list."
                .into(),
        },
        Question {
            id: QuestionId::new(4),
            difficulty: Difficulty::StringLogic,
            title: "The 'Z' Names Pattern (Target Question 2)".into(),
            description: "Find all customers whose <strong>First Name</strong> OR <strong>Last \
                Name</strong> starts with the letter 'Z'. Return the `customer_id`, \
                `first_name`, and `last_name`."
                .into(),
            schema_key: main(),
            solution: "SELECT customer_id, first_name, last_name\nFROM customers\n\
                WHERE first_name LIKE 'Z%'\n   OR last_name LIKE 'Z%';"
                .into(),
            logic: "1. <strong>LIKE 'Z%':</strong> The <code>%</code> is a wildcard. 'Z%' means \
                starts with Z.<br>2. <strong>OR:</strong> Crucial! If you used AND, they would \
                need to have BOTH names starting with Z (e.g. Zack Zuckerberg). The question \
                asked for EITHER."
                .into(),
        },
        Question {
            id: QuestionId::new(5),
            difficulty: Difficulty::BossLevel,
            title: "Complex Filtering (Z-Names + Dates)".into(),
            description: "<strong>Goal:</strong> Show one column (combined name) for customers \
                where First OR Last name starts with 'Z', AND they signed up in <strong>January \
                2024</strong>."
                .into(),
            schema_key: main(),
            solution: "SELECT \n  first_name || ' ' || last_name as full_name\nFROM customers\n\
                WHERE \n  (first_name LIKE 'Z%' OR last_name LIKE 'Z%')\n  \
                AND signup_date BETWEEN '2024-01-01' AND '2024-01-31';"
                .into(),
            logic: "1. <strong>Parentheses ():</strong> CRITICAL. You must wrap the <code>(A OR \
                B)</code> logic in brackets. Without them, SQL might read it as: <i>(First is Z) \
                OR (Last is Z AND Date is Jan)</i>.<br>2. <strong>Date Filter:</strong> \
                <code>BETWEEN</code> is standard for date ranges."
                .into(),
        },
    ]
}

impl QuestionBank {
    /// The built-in marketplace drill.
    ///
    /// # Panics
    ///
    /// Panics if the built-in content fails validation, which the tests rule out.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_questions(), builtin_schemas()).expect("built-in drill should be valid")
    }
}
