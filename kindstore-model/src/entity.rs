use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::FieldSpec;

/// A value type that can be stored under an entity kind.
///
/// Implemented by the [`entity!`](crate::entity) macro, which also generates
/// the matching [`Entity::Patch`] type. Implementing it by hand is fine too;
/// the store only relies on the contract below.
pub trait Entity: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Partial update for this entity: every field optional.
    type Patch: EntityPatch;

    /// Overwrites every field that is set in `patch`.
    fn apply(&mut self, patch: Self::Patch);

    /// Field list used to build the kind's [`EntitySchema`](crate::EntitySchema).
    fn fields() -> Vec<FieldSpec>;
}

/// The partial-update companion of an [`Entity`].
pub trait EntityPatch:
    Clone + Debug + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// True when no field is set, i.e. applying the patch changes nothing.
    fn is_empty(&self) -> bool;
}

/// Declares an entity struct together with its patch type.
///
/// The entity gets `Debug, Clone, PartialEq, Serialize, Deserialize` and
/// rejects unknown fields when deserialized. The patch has the same fields
/// wrapped in `Option`, defaults to all-`None` and only serializes set fields.
///
/// Field types must implement [`SchemaField`](crate::SchemaField). The calling
/// crate must depend on `serde`.
#[macro_export]
macro_rules! entity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident / $patch:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        #[doc = concat!("Partial update for [`", stringify!($name), "`]; unset fields are left untouched.")]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default, deny_unknown_fields)]
        $vis struct $patch {
            $(
                $(#[$fmeta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                $fvis $field: ::core::option::Option<$ty>,
            )*
        }

        impl $crate::EntityPatch for $patch {
            fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }
        }

        impl $crate::Entity for $name {
            type Patch = $patch;

            #[allow(unused_variables)]
            fn apply(&mut self, patch: $patch) {
                $(
                    if let ::core::option::Option::Some(value) = patch.$field {
                        self.$field = value;
                    }
                )*
            }

            fn fields() -> ::std::vec::Vec<$crate::FieldSpec> {
                ::std::vec![
                    $( $crate::FieldSpec::of::<$ty>(stringify!($field)), )*
                ]
            }
        }
    };
}
