//! Tests for painting walk sequences into pixel buffers

#[cfg(test)]
mod tests {
    use billiardwall::algorithm::renderer::{Paint, PatternRenderer, fill_area};
    use billiardwall::algorithm::walker::{Corner, walk};
    use billiardwall::io::color::ColorPair;
    use billiardwall::spatial::geometry::size_tiles;
    use image::{Rgba, RgbaImage};

    const INSIDE: Rgba<u8> = Rgba([200, 30, 30, 255]);
    const OUTSIDE: Rgba<u8> = Rgba([20, 20, 90, 255]);

    fn colors() -> ColorPair {
        ColorPair::new(INSIDE, OUTSIDE)
    }

    // Tests paint flipping and resolution
    // Verified by making flipped return self
    #[test]
    fn test_paint_flips_between_colors() {
        assert_eq!(Paint::Outside.flipped(), Paint::Inside);
        assert_eq!(Paint::Inside.flipped(), Paint::Outside);
        assert_eq!(Paint::Inside.color(&colors()), INSIDE);
        assert_eq!(Paint::Outside.color(&colors()), OUTSIDE);
    }

    // Tests tiles alternate colors in walk order starting with outside
    // Verified by starting the paint at Inside
    #[test]
    fn test_colors_alternate_in_walk_order() {
        let geometry = size_tiles(5, 3, None).unwrap();
        let image = PatternRenderer::new(geometry, colors()).render(walk(5, 3, Corner::TopLeft));

        for (index, tile) in walk(5, 3, Corner::TopLeft).enumerate() {
            let expected = if index % 2 == 0 { OUTSIDE } else { INSIDE };
            assert_eq!(
                *image.get_pixel(tile.x, tile.y),
                expected,
                "tile {index} at {tile}"
            );
        }
    }

    // Tests every pixel of a tile block takes the tile color
    // Verified by painting only the block's top-left pixel
    #[test]
    fn test_tile_blocks_are_filled() {
        let geometry = size_tiles(6, 4, None).unwrap();
        assert_eq!(geometry.tile, 2);
        let image = PatternRenderer::new(geometry, colors()).render(walk(3, 2, Corner::TopLeft));

        for block_y in 0..2 {
            for block_x in 0..3 {
                let reference = *image.get_pixel(block_x * 2, block_y * 2);
                for dy in 0..2 {
                    for dx in 0..2 {
                        assert_eq!(
                            *image.get_pixel(block_x * 2 + dx, block_y * 2 + dy),
                            reference
                        );
                    }
                }
            }
        }
    }

    // Tests the margins are painted with the outside color
    // Verified by skipping the bottom margin fill
    #[test]
    fn test_margins_take_outside_color() {
        let geometry = size_tiles(8, 5, Some(2)).unwrap();
        let image = PatternRenderer::new(geometry, colors()).render(walk(
            geometry.grid_width(),
            geometry.grid_height(),
            Corner::TopLeft,
        ));

        for x in 0..8 {
            assert_eq!(*image.get_pixel(x, 0), OUTSIDE);
            assert_eq!(*image.get_pixel(x, 3), OUTSIDE);
            assert_eq!(*image.get_pixel(x, 4), OUTSIDE);
        }
        assert!(image.pixels().all(|pixel| pixel.0[3] == 255));
    }

    // Tests the renderer paints only what it is given
    // Verified by filling the band with the outside color up front
    #[test]
    fn test_empty_sequence_leaves_band_transparent() {
        let geometry = size_tiles(8, 5, Some(2)).unwrap();
        let image = PatternRenderer::new(geometry, colors()).render(std::iter::empty());

        assert_eq!(image.get_pixel(0, 1).0[3], 0);
        assert_eq!(image.get_pixel(7, 2).0[3], 0);
        assert_eq!(*image.get_pixel(0, 0), OUTSIDE);
    }

    // Tests area fills are clipped to the image
    // Verified by removing the checked pixel access
    #[test]
    fn test_fill_area_clips_to_image() {
        let mut image = RgbaImage::new(4, 4);
        fill_area(&mut image, 3, 3, 5, 5, INSIDE);

        assert_eq!(*image.get_pixel(3, 3), INSIDE);
        assert_eq!(image.get_pixel(2, 2).0[3], 0);
        assert_eq!(image.pixels().filter(|pixel| pixel.0[3] != 0).count(), 1);
    }
}
