// src/query_selector.rs
//! Picks the SQL answer to submit from the registration number's last two digits.

use crate::error::{Result, SubmitterError};

/// Highest payment not made on the 1st of a month, with employee and department.
pub const QUERY1: &str = concat!(
    "SELECT p.AMOUNT AS SALARY, ",
    "       CONCAT(e.FIRST_NAME, ' ', e.LAST_NAME) AS NAME, ",
    "       TIMESTAMPDIFF(YEAR, e.DOB, CURDATE()) AS AGE, ",
    "       d.DEPARTMENT_NAME ",
    "FROM   PAYMENTS p ",
    "JOIN   EMPLOYEE   e ON p.EMP_ID = e.EMP_ID ",
    "JOIN   DEPARTMENT d ON e.DEPARTMENT = d.DEPARTMENT_ID ",
    "WHERE  DAY(p.PAYMENT_TIME) <> 1 ",
    "ORDER  BY p.AMOUNT DESC ",
    "LIMIT  1;",
);

/// Per employee, the number of younger colleagues in the same department.
pub const QUERY2: &str = concat!(
    "SELECT e1.EMP_ID, e1.FIRST_NAME, e1.LAST_NAME, d.DEPARTMENT_NAME, ",
    "       COUNT(e2.EMP_ID) AS YOUNGER_EMPLOYEES_COUNT ",
    "FROM   EMPLOYEE e1 ",
    "JOIN   DEPARTMENT d ON e1.DEPARTMENT = d.DEPARTMENT_ID ",
    "LEFT JOIN EMPLOYEE e2 ",
    "       ON e1.DEPARTMENT = e2.DEPARTMENT ",
    "      AND e2.DOB > e1.DOB ",
    "GROUP  BY e1.EMP_ID, e1.FIRST_NAME, e1.LAST_NAME, d.DEPARTMENT_NAME ",
    "ORDER  BY e1.EMP_ID DESC;",
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Odd,
    Even,
}

impl QueryKind {
    pub fn sql(self) -> &'static str {
        match self {
            QueryKind::Odd => QUERY1,
            QueryKind::Even => QUERY2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QueryKind::Odd => "QUERY1 (odd)",
            QueryKind::Even => "QUERY2 (even)",
        }
    }
}

/// Last two digits of the registration number, ignoring any non-digit characters.
pub fn last_two_digits(registration_number: &str) -> Result<u32> {
    let digits: Vec<u32> = registration_number
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    // value % 100 only depends on the trailing two digits, so long numbers never overflow
    match digits.as_slice() {
        [] => Err(SubmitterError::InvalidRegistrationNumber(
            registration_number.to_string(),
        )),
        [only] => Ok(*only),
        [.., tens, units] => Ok(tens * 10 + units),
    }
}

pub fn classify(registration_number: &str) -> Result<QueryKind> {
    let last_two = last_two_digits(registration_number)?;
    Ok(if last_two % 2 == 1 {
        QueryKind::Odd
    } else {
        QueryKind::Even
    })
}

pub fn select_query(registration_number: &str) -> Result<&'static str> {
    classify(registration_number).map(QueryKind::sql)
}
