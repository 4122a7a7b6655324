//! Unit tests for tr-world.
//!
//! All tests use hand-crafted layouts built with `GridWorldBuilder`.

#[cfg(test)]
mod grid {
    use tr_core::{Cell, Direction, Material, TrackOrientation};

    use crate::{GridWorld, GridWorldBuilder, World, WorldError, WorldView};

    fn origin() -> Cell {
        Cell::new(0, 0, 0)
    }

    #[test]
    fn empty_world_is_air_then_void() {
        let w = GridWorld::empty();
        assert!(w.is_empty());
        assert_eq!(w.material_at(origin()), Material::Air);
        assert_eq!(w.material_at(Cell::new(0, GridWorldBuilder::DEFAULT_MIN_Y, 0)), Material::Air);
        assert_eq!(w.material_at(Cell::new(0, GridWorldBuilder::DEFAULT_MIN_Y - 1, 0)), Material::Void);
    }

    #[test]
    fn ground_fills_below() {
        let w = GridWorldBuilder::new().ground(0).build();
        assert_eq!(w.material_at(Cell::new(5, -1, 5)), Material::Solid);
        assert_eq!(w.material_at(Cell::new(5, 0, 5)), Material::Air);
    }

    #[test]
    fn explicit_air_overrides_ground() {
        let w = GridWorldBuilder::new().ground(0).air(Cell::new(0, -1, 0)).build();
        assert_eq!(w.material_at(Cell::new(0, -1, 0)), Material::Air);
    }

    #[test]
    fn rail_line_places_straight_rails() {
        let w = GridWorldBuilder::new()
            .rail_line(origin(), Direction::East, 3)
            .build();
        assert_eq!(w.len(), 3);
        for x in 0..3 {
            let c = Cell::new(x, 0, 0);
            assert!(w.is_rail(c));
            assert_eq!(w.orientation_at(c), Some(TrackOrientation::EAST_WEST));
        }
        assert!(!w.is_rail(Cell::new(3, 0, 0)));
    }

    #[test]
    fn sign_lines_are_padded() {
        let w = GridWorldBuilder::new()
            .sign(origin(), &["[junction]", "home:N"])
            .build();
        assert_eq!(w.material_at(origin()), Material::Sign);
        let lines = w.sign_lines_at(origin()).unwrap();
        assert_eq!(lines[0], "[junction]");
        assert_eq!(lines[1], "home:N");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "");
        assert_eq!(w.orientation_at(origin()), None);
    }

    #[test]
    fn set_orientation_rewrites_rail() {
        let mut w = GridWorldBuilder::new()
            .rail(origin(), TrackOrientation::NORTH_SOUTH)
            .build();
        let corner = TrackOrientation::corner(Direction::NorthEast).unwrap();
        w.set_orientation_at(origin(), corner).unwrap();
        assert_eq!(w.orientation_at(origin()), Some(corner));
        assert_eq!(w.writes, 1);
    }

    #[test]
    fn set_orientation_on_non_rail_fails() {
        let mut w = GridWorldBuilder::new().solid(origin()).build();
        let err = w.set_orientation_at(origin(), TrackOrientation::EAST_WEST).unwrap_err();
        assert!(matches!(err, WorldError::NotTrack(c) if c == origin()));
        assert_eq!(w.writes, 0);
    }

    #[test]
    fn set_orientation_outside_loaded_data_fails() {
        let mut w = GridWorldBuilder::new().min_y(0).build();
        let below = Cell::new(0, -1, 0);
        let err = w.set_orientation_at(below, TrackOrientation::EAST_WEST).unwrap_err();
        assert!(matches!(err, WorldError::Unloaded(_)));
    }

    #[test]
    fn reads_through_references() {
        let w = GridWorldBuilder::new().rail(origin(), TrackOrientation::EAST_WEST).build();
        fn count_rails<V: WorldView>(v: V, cells: &[Cell]) -> usize {
            cells.iter().filter(|&&c| v.is_rail(c)).count()
        }
        assert_eq!(count_rails(&w, &[origin(), Cell::new(1, 0, 0)]), 1);
    }
}
