//! Значение ячейки таблицы и его полный порядок сравнения

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// Значение, прочитанное из поля строки таблицы
///
/// Порядок сравнения: `Null < Bool < число < Text`.
/// `Integer` и `Number` сравниваются между собой как числа.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    /// Отсутствующее поле или `null`
    #[default]
    Null,
    /// Логическое значение
    Bool(bool),
    /// Целое число
    Integer(i64),
    /// Число с плавающей точкой
    Number(f64),
    /// Текст (массивы и объекты хранятся как компактный JSON)
    Text(String),
}

impl CellValue {
    fn rank(&self) -> u8 {
        match self {
            CellValue::Null => 0,
            CellValue::Bool(_) => 1,
            CellValue::Integer(_) | CellValue::Number(_) => 2,
            CellValue::Text(_) => 3,
        }
    }

    /// Числовое представление (может терять точность для больших `Integer`)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Сравнение по возрастанию, определённое для любой пары значений
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Integer(a), CellValue::Integer(b)) => a.cmp(b),
            (CellValue::Number(a), CellValue::Number(b)) => compare_floats(*a, *b),
            (CellValue::Integer(i), CellValue::Number(f)) => compare_int_float(*i, *f),
            (CellValue::Number(f), CellValue::Integer(i)) => compare_int_float(*i, *f).reverse(),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

/// 2^63: первое значение f64 за пределами i64
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// NaN больше любого числа, `-0.0 == 0.0`
fn compare_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Точное сравнение целого с дробным без приведения i64 к f64
fn compare_int_float(i: i64, f: f64) -> Ordering {
    if f.is_nan() || f >= I64_UPPER {
        return Ordering::Less;
    }
    if f < -I64_UPPER {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    match i128::from(i).cmp(&(whole as i128)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(f - whole)).unwrap_or(Ordering::Equal),
        ordering => ordering,
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Integer(i),
                None => n.as_f64().map(CellValue::Number).unwrap_or_default(),
            },
            Value::String(s) => CellValue::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => CellValue::Text(value.to_string()),
        }
    }
}

impl From<Option<&Value>> for CellValue {
    fn from(value: Option<&Value>) -> Self {
        value.map(CellValue::from).unwrap_or_default()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}
