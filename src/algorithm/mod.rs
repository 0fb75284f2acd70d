/// Arithmetic billiards wallpaper configuration and generation
pub mod billiards;
/// Common interface of the generation methods
pub mod drawer;
/// Chaotic coin-flip noise wallpaper
pub mod noise;
/// Painting a tile sequence with alternating colors
pub mod renderer;
/// Bounce walk state machine over the tile grid
pub mod walker;
