//! Tests for the bounce walk state machine

#[cfg(test)]
mod tests {
    use billiardwall::algorithm::walker::{BounceWalker, Corner, Heading, WalkerState, walk};
    use billiardwall::math::arithmetic::gcd;
    use billiardwall::spatial::{GridSize, TilePos};
    use std::collections::HashSet;

    fn positions(walker: BounceWalker) -> Vec<(u32, u32)> {
        walker.map(|tile| (tile.x, tile.y)).collect()
    }

    // Tests the full 5x3 trajectory from the top-left corner
    // Verified by checking the vertical edge before the horizontal one
    #[test]
    fn test_five_by_three_trajectory() {
        let order = positions(walk(5, 3, Corner::TopLeft));

        assert_eq!(
            order,
            vec![
                (0, 0),
                (1, 1),
                (2, 2),
                (3, 2),
                (4, 1),
                (4, 0),
                (3, 0),
                (2, 1),
                (1, 2),
                (0, 2),
                (0, 1),
                (1, 0),
                (2, 0),
                (3, 1),
                (4, 2),
            ]
        );
    }

    // Tests the walker reaches the right edge after four steps and bounces off it
    // Verified by moving diagonally when the right edge is hit
    #[test]
    fn test_first_right_edge_bounce() {
        let order = positions(walk(5, 3, Corner::TopLeft));

        assert_eq!(order.get(4), Some(&(4, 1)));
        // Bounce keeps the column and moves one row up
        assert_eq!(order.get(5), Some(&(4, 0)));
    }

    // Tests the start tile and heading of every corner
    // Verified by swapping the bottom corners' rows
    #[test]
    fn test_initial_state_per_corner() {
        let grid = GridSize::new(3, 2);
        let cases = [
            (Corner::TopLeft, TilePos::new(0, 0), Heading::DownRight),
            (Corner::TopRight, TilePos::new(2, 0), Heading::DownLeft),
            (Corner::BottomRight, TilePos::new(2, 1), Heading::UpLeft),
            (Corner::BottomLeft, TilePos::new(0, 1), Heading::UpRight),
        ];

        for (corner, position, heading) in cases {
            let state = corner.initial_state(grid);
            assert_eq!(state.position, position, "{corner}");
            assert_eq!(state.heading, heading, "{corner}");

            let walker = BounceWalker::new(grid, corner);
            assert_eq!(walker.peek_state(), Some(state));
        }
    }

    // Tests a bottom-right walk over the 3x2 grid of a 6x4 canvas
    // Verified by starting bottom-right walks at row 0
    #[test]
    fn test_bottom_right_walk_on_three_by_two() {
        let order = positions(walk(3, 2, Corner::BottomRight));

        assert_eq!(
            order,
            vec![(2, 1), (1, 0), (0, 0), (0, 1), (1, 1), (2, 0)]
        );
    }

    // Tests every coprime grid is covered exactly once from every corner
    // Verified by stopping the slide after a single step
    #[test]
    fn test_full_coverage_on_coprime_grids() {
        for width in 1_u32..=24 {
            for height in 1_u32..=24 {
                if gcd(width, height) != 1 {
                    continue;
                }
                for corner in Corner::ALL {
                    let mut walker = walk(width, height, corner);
                    let order: Vec<TilePos> = walker.by_ref().collect();
                    let unique: HashSet<TilePos> = order.iter().copied().collect();

                    assert_eq!(
                        order.len(),
                        (width * height) as usize,
                        "{width}x{height} from {corner}"
                    );
                    assert_eq!(unique.len(), order.len());
                    assert!(walker.is_complete());
                }
            }
        }
    }

    // Tests a non-coprime grid ends early without repeating tiles
    // Verified by removing the out-of-grid termination
    #[test]
    fn test_non_coprime_grid_terminates_early() {
        let mut walker = walk(4, 4, Corner::TopLeft);
        let order: Vec<(u32, u32)> = walker.by_ref().map(|t| (t.x, t.y)).collect();

        assert_eq!(order, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert!(!walker.is_complete());
        assert_eq!(walker.visited_count(), 4);
        assert_eq!(walker.next(), None);
    }

    // Tests single row and single column grids
    // Verified by flipping both heading components on an edge hit
    #[test]
    fn test_degenerate_strips() {
        assert_eq!(
            positions(walk(1, 3, Corner::TopLeft)),
            vec![(0, 0), (0, 1), (0, 2)]
        );
        assert_eq!(
            positions(walk(3, 1, Corner::BottomLeft)),
            vec![(0, 0), (1, 0), (2, 0)]
        );
        assert_eq!(positions(walk(1, 1, Corner::BottomRight)), vec![(0, 0)]);
    }

    // Tests an empty grid yields nothing
    // Verified by creating the initial state unconditionally
    #[test]
    fn test_empty_grid_yields_nothing() {
        let mut walker = walk(0, 3, Corner::TopLeft);
        assert_eq!(walker.peek_state(), None);
        assert_eq!(walker.next(), None);
    }

    // Tests the step rule priorities directly
    // Verified by reversing both components on a corner hit
    #[test]
    fn test_step_rule() {
        let grid = GridSize::new(5, 3);
        let state = |x, y, heading| WalkerState {
            position: TilePos::new(x, y),
            heading,
        };

        // Diagonal
        assert_eq!(
            state(1, 1, Heading::DownRight).step(grid),
            Some(state(2, 2, Heading::DownRight))
        );
        // Horizontal edge wins: vertical move only
        assert_eq!(
            state(4, 1, Heading::UpRight).step(grid),
            Some(state(4, 0, Heading::UpLeft))
        );
        // Vertical edge: horizontal move only
        assert_eq!(
            state(2, 2, Heading::DownRight).step(grid),
            Some(state(3, 2, Heading::UpRight))
        );
        // Corner: nowhere to go
        assert_eq!(state(4, 2, Heading::DownRight).step(grid), None);
        assert_eq!(state(0, 0, Heading::UpLeft).step(grid), None);
    }

    // Tests heading reversals
    // Verified by flipping the vertical component in flip_horizontal
    #[test]
    fn test_heading_flips() {
        assert_eq!(Heading::DownRight.flip_horizontal(), Heading::DownLeft);
        assert_eq!(Heading::DownRight.flip_vertical(), Heading::UpRight);
        assert_eq!(Heading::UpLeft.flip_horizontal(), Heading::UpRight);
        assert_eq!(Heading::UpLeft.flip_vertical(), Heading::DownLeft);
        assert!(Heading::DownLeft.is_downward());
        assert!(!Heading::DownLeft.is_rightward());
    }

    // Tests corner parsing by name and by index
    // Verified by offsetting the index lookup by one
    #[test]
    fn test_corner_from_str() {
        assert_eq!("top-left".parse::<Corner>().unwrap(), Corner::TopLeft);
        assert_eq!("Bottom-Right".parse::<Corner>().unwrap(), Corner::BottomRight);
        assert_eq!("1".parse::<Corner>().unwrap(), Corner::TopRight);
        assert_eq!("3".parse::<Corner>().unwrap(), Corner::BottomLeft);
        assert!("4".parse::<Corner>().is_err());
        assert!("middle".parse::<Corner>().is_err());
    }

    // Tests corner names survive a display and parse round trip
    // Verified by displaying the Debug representation
    #[test]
    fn test_corner_display_parses_back() {
        for corner in Corner::ALL {
            assert_eq!(corner.to_string().parse::<Corner>().unwrap(), corner);
        }
    }

    // Tests the size hint shrinks as tiles are yielded
    // Verified by reporting the total tile count throughout
    #[test]
    fn test_size_hint_tracks_remaining_tiles() {
        let mut walker = walk(5, 3, Corner::TopRight);
        assert_eq!(walker.size_hint(), (1, Some(15)));

        walker.next();
        walker.next();
        assert_eq!(walker.size_hint(), (1, Some(13)));

        let _ = walker.by_ref().count();
        assert_eq!(walker.size_hint(), (0, Some(0)));
    }
}
