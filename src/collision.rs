/// Collision detection primitives for the arcade field
///
/// This module provides a trait-based collision system with AABB (Axis-Aligned Bounding Box)
/// detection. Game rules (who scores, who takes damage) live in `game::collisions`; this
/// module only answers "which entities overlap".
///
/// # Architecture
///
/// - `Collidable` trait: Implemented by every entity that can be hit
/// - `aabb_intersect`: Pure function for rectangle intersection
/// - `match_pairs`: Two-collection scan that pairs each left entity with at most one
///   right entity, so a removal pass never hits the same entity twice
/// - `remove_indices`: Order-preserving compaction of matched entities
///
/// # Rust Learning Notes
///
/// This module demonstrates:
/// - **Trait-based design**: Shared behavior across different entity types
/// - **Generics over slices**: One scan works for enemies, bosses, bullets, pickups
/// - **Detect, then mutate**: Indices are collected first and the `Vec` is compacted
///   afterwards, which keeps the borrow checker (and the iteration order) happy
use crate::geometry::Rect;

/// Trait for entities that participate in collision detection.
///
/// # Design Pattern: Trait-based Polymorphism
///
/// Each entity type (Player, Enemy, UfoBoss, Projectile, ...) implements this trait
/// to report where it currently is. Nothing else is needed to take part in a scan.
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this entity.
    ///
    /// The returned `Rect` matches the sprite as drawn: centered on the entity's
    /// position and grown to cover any rotation.
    fn get_bounds(&self) -> Rect;
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles intersect if they overlap on both the X and Y axes.
/// Edges are exclusive: rectangles that only touch do not intersect.
///
/// # Performance
///
/// This is an O(1) operation - just a few float comparisons.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x < b.right() && a.right() > b.x;
    let y_overlap = a.y < b.bottom() && a.bottom() > b.y;

    x_overlap && y_overlap
}

/// Checks collision between a single collidable entity and a collection of other entities.
///
/// Returns every index in `entities` whose bounds intersect `entity`.
pub fn check_collisions_with_collection<T: Collidable>(
    entity: &impl Collidable,
    entities: &[T],
) -> Vec<usize> {
    let entity_bounds = entity.get_bounds();
    let mut collisions = Vec::new();

    for (index, other) in entities.iter().enumerate() {
        if aabb_intersect(&entity_bounds, &other.get_bounds()) {
            collisions.push(index);
        }
    }

    collisions
}

/// Returns the index of the first entity in `entities` that intersects `entity`,
/// skipping any index flagged in `taken`.
pub fn first_hit<T: Collidable>(
    entity: &impl Collidable,
    entities: &[T],
    taken: &[bool],
) -> Option<usize> {
    let entity_bounds = entity.get_bounds();
    entities.iter().enumerate().position(|(index, other)| {
        !taken.get(index).copied().unwrap_or(false)
            && aabb_intersect(&entity_bounds, &other.get_bounds())
    })
}

/// Pairs left entities with right entities for one resolution pass.
///
/// For each left entity (in order) the first right entity it overlaps that has not
/// already been claimed is chosen, and the scan for that left entity stops. Every
/// entity therefore appears in at most one pair.
///
/// # Example
///
/// ```rust
/// use bhaata_phod::collision::{match_pairs, Collidable};
/// use bhaata_phod::geometry::Rect;
///
/// struct Box(Rect);
/// impl Collidable for Box {
///     fn get_bounds(&self) -> Rect {
///         self.0
///     }
/// }
///
/// let bullets = vec![Box(Rect::new(0.0, 0.0, 4.0, 4.0)), Box(Rect::new(1.0, 1.0, 4.0, 4.0))];
/// let rocks = vec![Box(Rect::new(2.0, 2.0, 10.0, 10.0))];
///
/// // Both bullets overlap the one rock, but it can only be destroyed once.
/// assert_eq!(match_pairs(&bullets, &rocks), vec![(0, 0)]);
/// ```
pub fn match_pairs<L: Collidable, R: Collidable>(left: &[L], right: &[R]) -> Vec<(usize, usize)> {
    let mut taken = vec![false; right.len()];
    let mut pairs = Vec::new();

    for (left_index, entity) in left.iter().enumerate() {
        if let Some(right_index) = first_hit(entity, right, &taken) {
            taken[right_index] = true;
            pairs.push((left_index, right_index));
        }
    }

    pairs
}

/// Removes the given indices from `items`, preserving the order of survivors.
///
/// Indices may be unsorted or repeated; out-of-range indices are ignored.
pub fn remove_indices<T>(items: &mut Vec<T>, indices: impl IntoIterator<Item = usize>) {
    let mut doomed = vec![false; items.len()];
    for index in indices {
        if let Some(flag) = doomed.get_mut(index) {
            *flag = true;
        }
    }

    let mut cursor = 0;
    items.retain(|_| {
        let keep = !doomed[cursor];
        cursor += 1;
        keep
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestBox(Rect);

    impl Collidable for TestBox {
        fn get_bounds(&self) -> Rect {
            self.0
        }
    }

    #[test]
    fn test_aabb_intersect_overlapping() {
        let rect_a = Rect::new(0.0, 0.0, 32.0, 32.0);
        let rect_b = Rect::new(16.0, 16.0, 32.0, 32.0);

        assert!(aabb_intersect(&rect_a, &rect_b));
        assert!(aabb_intersect(&rect_b, &rect_a)); // Symmetric
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        let rect_a = Rect::new(0.0, 0.0, 32.0, 32.0);
        let rect_b = Rect::new(32.0, 0.0, 32.0, 32.0);

        assert!(!aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_contained() {
        let large = Rect::new(0.0, 0.0, 100.0, 100.0);
        let small = Rect::new(25.0, 25.0, 50.0, 50.0);

        assert!(aabb_intersect(&large, &small));
        assert!(aabb_intersect(&small, &large));
    }

    #[test]
    fn test_check_collisions_with_collection() {
        let probe = TestBox(Rect::new(0.0, 0.0, 10.0, 10.0));
        let others = vec![
            TestBox(Rect::new(5.0, 5.0, 10.0, 10.0)),
            TestBox(Rect::new(50.0, 50.0, 10.0, 10.0)),
            TestBox(Rect::new(-5.0, -5.0, 6.0, 6.0)),
        ];

        assert_eq!(check_collisions_with_collection(&probe, &others), vec![0, 2]);
    }

    #[test]
    fn test_first_hit_skips_taken() {
        let probe = TestBox(Rect::new(0.0, 0.0, 10.0, 10.0));
        let others = vec![
            TestBox(Rect::new(1.0, 1.0, 2.0, 2.0)),
            TestBox(Rect::new(3.0, 3.0, 2.0, 2.0)),
        ];

        assert_eq!(first_hit(&probe, &others, &[false, false]), Some(0));
        assert_eq!(first_hit(&probe, &others, &[true, false]), Some(1));
        assert_eq!(first_hit(&probe, &others, &[true, true]), None);
    }

    #[test]
    fn test_match_pairs_resolves_each_entity_once() {
        // Two shots over two overlapping rocks: each shot takes a different rock
        let shots = vec![
            TestBox(Rect::new(0.0, 0.0, 20.0, 20.0)),
            TestBox(Rect::new(0.0, 0.0, 20.0, 20.0)),
            TestBox(Rect::new(0.0, 0.0, 20.0, 20.0)),
        ];
        let rocks = vec![
            TestBox(Rect::new(5.0, 5.0, 5.0, 5.0)),
            TestBox(Rect::new(6.0, 6.0, 5.0, 5.0)),
        ];

        let pairs = match_pairs(&shots, &rocks);
        assert_eq!(pairs, vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_remove_indices_preserves_order() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        remove_indices(&mut items, [3, 0, 3, 99]);
        assert_eq!(items, vec!['b', 'c', 'e']);
    }
}
