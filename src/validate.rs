use crate::{basis::Dims, grid::Grid};


/// 画像サイズ・タイルサイズ・並び順の組で並べ替えができるかを検査する.
///
/// タイルサイズは画像の各辺を余りなく割り切り, `ordering` は全てのタイルを丁度一度ずつ
/// 使わなければならない.
pub(crate) fn valid_input(image_size: Dims, tile_size: Dims, ordering: &[u32]) -> bool {
    if tile_size.width == 0 || tile_size.height == 0 {
        return false;
    }
    if image_size.width % tile_size.width != 0 || image_size.height % tile_size.height != 0 {
        return false;
    }

    let tiles = Grid::new(image_size, tile_size).tiles();
    if ordering.len() != tiles as usize {
        return false;
    }

    // 長さが一致して全要素が範囲内で重複しなければ, 最小値 0 と最大値 tiles - 1 も満たされる.
    let mut used = vec![false; tiles as usize];
    for &target in ordering {
        if tiles <= target || std::mem::replace(&mut used[target as usize], true) {
            return false;
        }
    }
    true
}
