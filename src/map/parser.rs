//! Layout parsing: converts a raw tile-code grid into structured data.

use crate::constants::Tile;
use crate::error::LayoutError;

/// Represents the validated data parsed from a raw layout.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedLayout {
    /// Tile grid, indexed `[row][col]`.
    pub tiles: Vec<Vec<Tile>>,
    /// Rows containing tunnel tiles.
    pub tunnel_rows: Vec<usize>,
    /// Ghost-house cells in reading order.
    pub house_cells: Vec<(usize, usize)>,
}

/// Parser for raw integer tile-code layouts.
pub struct LayoutParser;

impl LayoutParser {
    /// Parses a single tile code.
    pub fn parse_code(code: u8) -> Option<Tile> {
        match code {
            0 => Some(Tile::Dot),
            1 => Some(Tile::Wall),
            2 => Some(Tile::EmptyPath),
            3 => Some(Tile::PowerPellet),
            4 => Some(Tile::GhostHouse),
            5 => Some(Tile::Tunnel),
            _ => None,
        }
    }

    /// Parses and validates a raw layout.
    ///
    /// # Errors
    ///
    /// Fails on an empty grid, ragged rows, unknown tile codes, or a
    /// tunnel row whose tunnel tiles are all on one side of the maze.
    /// These are configuration defects and must prevent session start.
    pub fn parse(layout: &[&[u8]]) -> Result<ParsedLayout, LayoutError> {
        if layout.is_empty() || layout[0].is_empty() {
            return Err(LayoutError::Empty);
        }

        let cols = layout[0].len();
        let mut tiles = Vec::with_capacity(layout.len());
        let mut tunnel_rows = Vec::new();
        let mut house_cells = Vec::new();

        for (row, codes) in layout.iter().enumerate() {
            if codes.len() != cols {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: cols,
                    found: codes.len(),
                });
            }

            let mut parsed_row = Vec::with_capacity(cols);
            let (mut left_tunnel, mut right_tunnel) = (false, false);

            for (col, &code) in codes.iter().enumerate() {
                let tile = LayoutParser::parse_code(code).ok_or(LayoutError::UnknownTileCode { code, row, col })?;

                match tile {
                    Tile::Tunnel => {
                        if col < cols / 2 {
                            left_tunnel = true;
                        } else {
                            right_tunnel = true;
                        }
                    }
                    Tile::GhostHouse => house_cells.push((row, col)),
                    _ => {}
                }

                parsed_row.push(tile);
            }

            if left_tunnel || right_tunnel {
                if left_tunnel != right_tunnel {
                    return Err(LayoutError::UnpairedTunnelRow { row });
                }
                tunnel_rows.push(row);
            }

            tiles.push(parsed_row);
        }

        Ok(ParsedLayout {
            tiles,
            tunnel_rows,
            house_cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RAW_LAYOUT;
    use pretty_assertions::assert_eq;

    fn rows(layout: &[[u8; 19]]) -> Vec<&[u8]> {
        layout.iter().map(|r| r.as_slice()).collect()
    }

    #[test]
    fn test_parse_code() {
        assert_eq!(LayoutParser::parse_code(0), Some(Tile::Dot));
        assert_eq!(LayoutParser::parse_code(1), Some(Tile::Wall));
        assert_eq!(LayoutParser::parse_code(2), Some(Tile::EmptyPath));
        assert_eq!(LayoutParser::parse_code(3), Some(Tile::PowerPellet));
        assert_eq!(LayoutParser::parse_code(4), Some(Tile::GhostHouse));
        assert_eq!(LayoutParser::parse_code(5), Some(Tile::Tunnel));
        assert_eq!(LayoutParser::parse_code(9), None);
    }

    #[test]
    fn test_parse_standard_layout() {
        let layout = rows(&RAW_LAYOUT);
        let parsed = LayoutParser::parse(&layout).unwrap();

        assert_eq!(parsed.tiles.len(), 22);
        assert_eq!(parsed.tiles[0].len(), 19);
        assert_eq!(parsed.tunnel_rows, vec![8, 10, 12]);
        assert_eq!(parsed.house_cells, vec![(9, 9), (10, 8), (10, 9), (10, 10)]);
    }

    #[test]
    fn test_empty_layout_rejected() {
        assert_eq!(LayoutParser::parse(&[]), Err(LayoutError::Empty));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let layout: Vec<&[u8]> = vec![&[1, 1, 1], &[1, 1]];
        assert_eq!(
            LayoutParser::parse(&layout),
            Err(LayoutError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_unknown_code_rejected() {
        let layout: Vec<&[u8]> = vec![&[1, 1, 1], &[1, 7, 1]];
        assert_eq!(
            LayoutParser::parse(&layout),
            Err(LayoutError::UnknownTileCode { code: 7, row: 1, col: 1 })
        );
    }

    #[test]
    fn test_unpaired_tunnel_row_rejected() {
        let layout: Vec<&[u8]> = vec![&[1, 1, 1, 1], &[5, 0, 0, 1], &[1, 1, 1, 1]];
        assert_eq!(LayoutParser::parse(&layout), Err(LayoutError::UnpairedTunnelRow { row: 1 }));
    }
}
