//! Общие типы и чистая логика таблицы данных, не зависящие от платформы

pub mod shared;
