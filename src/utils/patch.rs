//! Partial updates.
//!
//! A patch is a struct of `Option` fields mirroring an entity's attributes.
//! `None` leaves the target untouched; `Some` overwrites it. Fields are matched
//! by name at compile time, so a patch can never write a value of the wrong type
//! and can never clear a populated field.

/// Overlay of a partial update onto a stored value.
pub trait Patch<T> {
    fn apply_to(self, target: &mut T);
}

/// Copies every `Some` field of `$patch` onto the same-named field of `$target`.
///
/// ```ignore
/// apply_patch!(self => target; first_name, last_name);
/// apply_patch!(self => target; opt seller_id);
/// ```
///
/// The `opt` form is for targets whose field is itself an `Option`: a `Some`
/// in the patch becomes `Some` in the target, `None` still means unchanged.
#[macro_export]
macro_rules! apply_patch {
    ($patch:expr => $target:expr; opt $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = Some(value);
            }
        )+
    };
    ($patch:expr => $target:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Target {
        name: String,
        capacity: i32,
        owner: Option<i32>,
    }

    #[derive(Debug, Clone, Default)]
    struct TargetPatch {
        name: Option<String>,
        capacity: Option<i32>,
        owner: Option<i32>,
    }

    impl Patch<Target> for TargetPatch {
        fn apply_to(self, target: &mut Target) {
            apply_patch!(self => target; name, capacity);
            apply_patch!(self => target; opt owner);
        }
    }

    fn target() -> Target {
        Target {
            name: "north".into(),
            capacity: 10,
            owner: Some(3),
        }
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut t = target();
        TargetPatch::default().apply_to(&mut t);
        assert_eq!(t, target());
    }

    #[test]
    fn only_present_fields_are_written() {
        let mut t = target();
        TargetPatch {
            capacity: Some(25),
            ..Default::default()
        }
        .apply_to(&mut t);

        assert_eq!(t.capacity, 25);
        assert_eq!(t.name, "north");
        assert_eq!(t.owner, Some(3));
    }

    #[test]
    fn optional_target_fields_are_never_cleared() {
        let mut t = target();
        TargetPatch {
            owner: None,
            name: Some("south".into()),
            ..Default::default()
        }
        .apply_to(&mut t);
        assert_eq!(t.owner, Some(3));

        TargetPatch {
            owner: Some(9),
            ..Default::default()
        }
        .apply_to(&mut t);
        assert_eq!(t.owner, Some(9));
    }

    proptest! {
        #[test]
        fn applying_twice_equals_applying_once(
            name in proptest::option::of("[a-z]{0,12}"),
            capacity in proptest::option::of(any::<i32>()),
            owner in proptest::option::of(any::<i32>()),
        ) {
            let patch = TargetPatch { name, capacity, owner };

            let mut once = target();
            patch.clone().apply_to(&mut once);

            let mut twice = once.clone();
            patch.apply_to(&mut twice);

            prop_assert_eq!(once, twice);
        }
    }
}
