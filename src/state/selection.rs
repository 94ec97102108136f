use super::board::Tile;

/// Picked tile indices in pick order. Each tile's `used` flag mirrors membership here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    order: Vec<usize>,
}

impl Selection {
    /// Appends `index` unless the tile is already used or does not exist.
    pub fn pick(&mut self, tiles: &mut [Tile], index: usize) -> bool {
        let Some(tile) = tiles.get_mut(index) else {
            return false;
        };
        if tile.used {
            return false;
        }
        tile.used = true;
        self.order.push(index);
        true
    }

    pub fn remove_last(&mut self, tiles: &mut [Tile]) -> Option<usize> {
        let idx = self.order.pop()?;
        if let Some(tile) = tiles.get_mut(idx) {
            tile.used = false;
        }
        Some(idx)
    }

    pub fn clear(&mut self, tiles: &mut [Tile]) {
        for idx in self.order.drain(..) {
            if let Some(tile) = tiles.get_mut(idx) {
                tile.used = false;
            }
        }
    }

    /// Lower-cased word spelled by the selected tiles.
    pub fn current_word(&self, tiles: &[Tile]) -> String {
        self.order
            .iter()
            .filter_map(|&i| tiles.get(i))
            .map(|t| t.ch.to_ascii_lowercase())
            .collect()
    }

    pub fn indices(&self) -> &[usize] {
        &self.order
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
