use std::{
    any::{Any, TypeId},
    collections::HashMap,
};

mod macros;

pub trait Provider: Sized {
    fn get<T: 'static + Clone>(&self) -> Option<T>;
    fn insert<T: 'static>(&mut self, value: T);
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provide: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provide for P {}

#[derive(Debug, Default)]
pub struct TypeMap(HashMap<TypeId, Box<dyn Any>>);

impl TypeMap {
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.0
            .get(&TypeId::of::<T>())
            .map(|x| x.downcast_ref().unwrap())
    }

    pub fn insert<T: 'static>(&mut self, x: T) {
        self.0.insert(TypeId::of::<T>(), Box::new(x));
    }
}

#[cfg(test)]
mod tests {
    use crate::{Provide, Provider};

    crate::provider! {
        TestProvider {
            number: u32,
        }
    }

    crate::build! {
        #[derive(Debug, Clone, PartialEq, Eq)]
        struct Widget {
            number: u32,
        }
    }

    #[test]
    fn build_from_provider_field() {
        let mut provider = TestProvider {
            _cache: Default::default(),
            number: 7,
        };

        let widget: Widget = provider.provide();

        assert_eq!(widget, Widget { number: 7 });
    }

    #[test]
    fn cached_value_takes_precedence() {
        let mut provider = TestProvider {
            _cache: Default::default(),
            number: 7,
        };
        provider.insert(Widget { number: 42 });

        let widget: Widget = provider.provide();

        assert_eq!(widget, Widget { number: 42 });
    }

    #[test]
    fn built_value_is_cached() {
        let mut provider = TestProvider {
            _cache: Default::default(),
            number: 7,
        };

        let _: Widget = provider.provide();
        provider.number = 8;
        let widget: Widget = provider.provide();

        assert_eq!(widget, Widget { number: 7 });
    }
}
