use core::any::{Any, TypeId};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicI64, Ordering},
        Mutex, MutexGuard, OnceLock, PoisonError,
    },
};

use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    series::SeriesKind,
    word::Word,
};

use super::{token::Token, Base, Class, Domain, Flavor, Member};

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// Cache of canonical classes.
///
/// Classes are looked up by `(name, members, id)` when restored from a
/// [`Token`], and by `(name, members)` when declared, so each declaration or
/// restoration of the same domain yields the very same [`Class`].
pub struct Registry<M, T = u64> {
    classes: Mutex<Classes<M, T>>,
}

struct Classes<M, T> {
    by_id: HashMap<i64, Vec<Class<M, T>>>,
    declared: HashMap<String, Vec<Class<M, T>>>,
}

impl<M: Member, T: Word> Default for Registry<M, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Member, T: Word> Registry<M, T> {
    pub fn new() -> Self {
        Self {
            classes: Mutex::new(Classes {
                by_id: HashMap::new(),
                declared: HashMap::new(),
            }),
        }
    }

    /// The process-wide registry for classes with members `M` backed by `T`.
    pub fn global() -> &'static Self {
        static REGISTRIES: OnceLock<Mutex<HashMap<TypeId, &'static (dyn Any + Send + Sync)>>> = OnceLock::new();
        let mut registries = REGISTRIES
            .get_or_init(Default::default)
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let registry: &'static (dyn Any + Send + Sync) = *registries
            .entry(TypeId::of::<Self>())
            .or_insert_with(|| -> &'static (dyn Any + Send + Sync) { Box::leak(Box::new(Self::new())) });
        drop(registries);
        registry
            .downcast_ref()
            .unwrap_or_else(|| unreachable!("registries are keyed by their own type id"))
    }

    fn lock(&self) -> MutexGuard<'_, Classes<M, T>> {
        self.classes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Declare the class `name` over `members`.
    ///
    /// Declaring the same name and members again returns the existing class,
    /// unless it was declared with a different base or series.
    pub fn declare(
        &self,
        name: &str,
        members: impl Into<Vec<M>>,
        base: impl Into<Base<M, T>>,
        list: bool,
        tuple: bool,
    ) -> Result<Class<M, T>> {
        let flavor = match base.into() {
            Base::Flavor(flavor) => flavor,
            Base::Bound(class) => return Err(Error::AlreadyBound(format!("{class:?}"))),
        };
        let members = members.into();
        let mut classes = self.lock();
        let existing = classes
            .declared
            .get(name)
            .and_then(|declared| declared.iter().find(|c| c.members() == members.as_slice()));
        if let Some(existing) = existing {
            let same = existing.flavor() == flavor
                && existing.has_series(SeriesKind::List) == list
                && existing.has_series(SeriesKind::Tuple) == tuple;
            if !same {
                return Err(Error::AlreadyDeclared {
                    existing: format!("{existing:?}"),
                });
            }
            trace!(name, id = existing.id(), "bitset class already declared");
            return Ok(existing.clone());
        }
        let id = loop {
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            if classes.find(name, &members, id).is_none() {
                break id;
            }
        };
        let class = Class::new(Domain::new(name.to_owned(), members, id, flavor, list, tuple)?);
        classes
            .declared
            .entry(name.to_owned())
            .or_default()
            .push(class.clone());
        classes.insert(class.clone());
        Ok(class)
    }

    /// Return the class registered as `(name, members, id)`, creating it if
    /// this registry has not seen it yet.
    pub fn get_or_create(
        &self,
        name: &str,
        members: impl Into<Vec<M>>,
        id: i64,
        flavor: Flavor,
        list: bool,
        tuple: bool,
    ) -> Result<Class<M, T>> {
        let members = members.into();
        let mut classes = self.lock();
        if let Some(existing) = classes.find(name, &members, id) {
            trace!(name, id, "bitset class restored from cache");
            return Ok(existing.clone());
        }
        let class = Class::new(Domain::new(name.to_owned(), members, id, flavor, list, tuple)?);
        classes.insert(class.clone());
        Ok(class)
    }

    /// Reconstruct the class a [`Token`] was taken from.
    pub fn restore(&self, token: &Token<M>) -> Result<Class<M, T>> {
        let flavor = token.base.parse()?;
        let list = token.series(SeriesKind::List)?;
        let tuple = token.series(SeriesKind::Tuple)?;
        self.get_or_create(&token.name, token.members.clone(), token.id, flavor, list, tuple)
    }

    /// Number of distinct classes held.
    pub fn len(&self) -> usize {
        self.lock().by_id.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<M: Member, T: Word> Classes<M, T> {
    fn find(&self, name: &str, members: &[M], id: i64) -> Option<&Class<M, T>> {
        self.by_id
            .get(&id)?
            .iter()
            .find(|c| c.name() == name && c.members() == members)
    }

    fn insert(&mut self, class: Class<M, T>) {
        debug!(
            name = class.name(),
            id = class.id(),
            members = class.len(),
            flavor = %class.flavor(),
            "created bitset class"
        );
        self.by_id.entry(class.id()).or_default().push(class);
    }
}
