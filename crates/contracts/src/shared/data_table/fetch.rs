//! Выбор арности вызова загрузки данных

use serde::{Deserialize, Serialize};

/// Аргументы вызова загрузки: без параметров, с одним или с двумя
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchArgs<P> {
    None,
    One(P),
    Two(P, P),
}

impl<P> FetchArgs<P> {
    pub fn arity(&self) -> usize {
        match self {
            FetchArgs::None => 0,
            FetchArgs::One(_) => 1,
            FetchArgs::Two(_, _) => 2,
        }
    }
}

/// Таблица выбора вызова
///
/// - `two_props` и оба параметра заданы: `fetch(p1, p2)`
/// - без `two_props` и задан первый параметр: `fetch(p1)`
/// - иначе `fetch()`, если действие загрузки вообще передано
///
/// Возвращает `None`, если вызывать нечего.
pub fn dispatch_fetch<P: Clone>(
    has_fetch: bool,
    first: Option<&P>,
    second: Option<&P>,
    two_props: bool,
) -> Option<FetchArgs<P>> {
    if !has_fetch {
        return None;
    }
    let args = match (first, second, two_props) {
        (Some(p1), Some(p2), true) => FetchArgs::Two(p1.clone(), p2.clone()),
        (Some(p1), _, false) => FetchArgs::One(p1.clone()),
        _ => FetchArgs::None,
    };
    Some(args)
}
