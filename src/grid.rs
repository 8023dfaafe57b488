use crate::basis::Dims;

/// `Pos` は分割グリッド上のタイル座標を表す.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pos {
    pub(crate) x: u32,
    pub(crate) y: u32,
}

impl std::fmt::Debug for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// `Grid` は原画像をタイルに分割したときの分割グリッドを表す.
///
/// タイルは行優先で線形に番号付けされる. 番号 `i` のタイルは列 `i % cols`, 行 `i / cols` に位置する.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Grid {
    cols: u32,
    rows: u32,
}

impl Grid {
    /// 画像サイズとそれを割り切るタイルサイズから分割グリッドを作る.
    pub(crate) fn new(image_size: Dims, tile_size: Dims) -> Self {
        debug_assert!(image_size.width % tile_size.width == 0);
        debug_assert!(image_size.height % tile_size.height == 0);
        Self {
            cols: image_size.width / tile_size.width,
            rows: image_size.height / tile_size.height,
        }
    }

    pub(crate) fn tiles(&self) -> u32 {
        self.cols * self.rows
    }

    /// 線形なタイル番号をグリッド上の座標に変換する.
    pub(crate) fn pos_of(&self, index: u32) -> Pos {
        debug_assert!(index < self.tiles());
        Pos {
            x: index % self.cols,
            y: index / self.cols,
        }
    }
}
