/// Defines a dependency provider: a struct holding externally constructed
/// values (and optionally nested providers) from which services can be built.
#[macro_export]
macro_rules! provider {
    ($(#[doc=$doc:literal])* $vis:vis $ident:ident {
        $( $field:ident: $ty:ty, )*
        $( .. $bfield:ident: $base:ty { $($ity:ty,)* $(,)? } )*
    }) => {
        $(#[doc=$doc])*
        $vis struct $ident {
            _cache: $crate::TypeMap,
            $( $field: $ty, )*
            $( $bfield: $base, )*
        }

        impl $crate::Provider for $ident {
            fn get<__T: 'static + ::core::clone::Clone>(&self) -> ::core::option::Option<__T> {
                self._cache.get().cloned()
            }

            fn insert<__T: 'static>(&mut self, value: __T) {
                self._cache.insert(value);
            }
        }

        $(
            impl $crate::Build<$ident> for $ty {
                fn build(provider: &mut $ident) -> Self {
                    ::core::clone::Clone::clone(&provider.$field)
                }
            }
        )*

        $($(
            impl $crate::Build<$ident> for $ity {
                fn build(provider: &mut $ident) -> Self {
                    $crate::Provide::provide(&mut provider.$bfield)
                }
            }
        )*)*
    };
}

/// Defines a service struct together with a [`Build`](crate::Build) impl that
/// constructs each field from the provider. Fields in the optional `state`
/// block are not resolved through the provider but initialized via
/// [`Default`]. Built values are cached in the provider, so each service is
/// constructed at most once per provider.
#[macro_export]
macro_rules! build {
    (
        $(#[$attr:meta])*
        $vis:vis struct $ident:ident $(<$($generic:ident),* $(,)?>)? {
            $( $field:ident: $ty:ty, )*
        }
        $(state {
            $( $sfield:ident: $sty:ty, )*
        })?
    ) => {
        $(#[$attr])*
        $vis struct $ident $(<$($generic),*>)? {
            $( $field: $ty, )*
            $($( $sfield: $sty, )*)?
        }

        impl<__Provider: $crate::Provider $($(, $generic)*)?> $crate::Build<__Provider>
            for $ident $(<$($generic),*>)?
        where
            Self: ::core::clone::Clone + 'static,
            $( $ty: $crate::Build<__Provider>, )*
        {
            fn build(provider: &mut __Provider) -> Self {
                if let ::core::option::Option::Some(cached) = $crate::Provider::get(provider) {
                    cached
                } else {
                    let built = Self {
                        $( $field: $crate::Build::build(provider), )*
                        $($( $sfield: ::core::default::Default::default(), )*)?
                    };
                    $crate::Provider::insert(provider, ::core::clone::Clone::clone(&built));
                    built
                }
            }
        }
    };
    (
        $(#[$attr:meta])*
        $vis:vis struct $ident:ident;
    ) => {
        $(#[$attr])*
        $vis struct $ident;

        impl<__Provider: $crate::Provider> $crate::Build<__Provider> for $ident {
            fn build(_provider: &mut __Provider) -> Self {
                Self
            }
        }
    };
}
