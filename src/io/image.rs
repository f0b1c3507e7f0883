//! PNG export of grid contents
//!
//! Each cell becomes a square block of pixels. Tokens are coloured from a
//! fixed palette in sorted token order; border cells and holes are left
//! transparent.

use image::{ImageBuffer, Rgba};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::io::configuration::{MAX_RENDER_SCALE, PALETTE, TRANSPARENT};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::spatial::grid::Grid;

/// Assign a palette colour to every stored token, in sorted token order
pub fn color_mapping(grid: &Grid) -> Vec<(String, [u8; 4])> {
    let tokens: BTreeSet<String> = (0..grid.height())
        .flat_map(|row| {
            grid.row_cells(row)
                .filter_map(|(_, cell)| cell.map(|cell| cell.value().to_string()))
                .collect::<Vec<_>>()
        })
        .collect();

    tokens
        .into_iter()
        .zip(PALETTE.iter().cycle())
        .map(|(token, color)| (token, *color))
        .collect()
}

/// Render the grid as a PNG image with `scale` pixels per cell edge
///
/// # Errors
///
/// Returns an error if:
/// - The grid has no cells
/// - `scale` is zero or larger than [`MAX_RENDER_SCALE`]
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, scale: u32, output_path: &Path) -> Result<()> {
    if grid.width() == 0 || grid.height() == 0 {
        return Err(invalid_parameter(
            "grid",
            &format!("{}x{}", grid.height(), grid.width()),
            &"Cannot render an empty grid",
        ));
    }
    if scale == 0 || scale > MAX_RENDER_SCALE {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!("Must be between 1 and {MAX_RENDER_SCALE}"),
        ));
    }

    let mapping = color_mapping(grid);
    let colors: BTreeMap<&str, [u8; 4]> = mapping
        .iter()
        .map(|(token, color)| (token.as_str(), *color))
        .collect();
    let width = scaled_extent("width", grid.width(), scale)?;
    let height = scaled_extent("height", grid.height(), scale)?;

    let img = ImageBuffer::from_fn(width, height, |px, py| {
        let slot = ((py / scale) as usize, (px / scale) as usize);
        let color = grid
            .cell_array()
            .get(slot)
            .and_then(Option::as_ref)
            .and_then(|cell| colors.get(cell.value()))
            .copied()
            .unwrap_or(TRANSPARENT);
        Rgba(color)
    });

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GridError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::debug!("Rendered grid to {}", output_path.display());
    Ok(())
}

/// Pixel length of an image axis spanning `cells` cells at `scale`
///
/// # Errors
///
/// Returns [`GridError::InvalidParameter`] if the length does not fit in a `u32`.
pub fn scaled_extent(axis: &'static str, cells: usize, scale: u32) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(scale))
        .ok_or_else(|| {
            invalid_parameter(
                axis,
                &cells,
                &format!("Too many cells to render at scale {scale}"),
            )
        })
}
