use {
    crate::{basis::Dims, grid::Grid, validate::valid_input},
    anyhow::{ensure, Context, Result},
    image::{io::Reader, DynamicImage, GenericImage, GenericImageView},
    std::{fmt, path::Path},
};


/// `InvalidInput` はタイルサイズや並び順が画像と整合しないことを表すエラー.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InvalidInput;

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("The tile size or ordering are not valid for the given image")
    }
}

impl std::error::Error for InvalidInput {}

/// `image_path` の画像を `tile_size` のタイルに分割し, `ordering` に従って並べ替えて
/// `out_path` に保存する.
///
/// `ordering` の位置 `i` は出力のスロット `i` に置く元タイルの番号を表す. 検査に通らない
/// 組み合わせでは [`InvalidInput`] で失敗し, 出力は書き込まれない. 出力フォーマットは
/// `out_path` の拡張子から決まる.
pub(crate) fn rearrange_tiles(
    image_path: impl AsRef<Path>,
    tile_size: Dims,
    ordering: &[u32],
    out_path: impl AsRef<Path>,
) -> Result<()> {
    let image_path = image_path.as_ref();
    let src = Reader::open(image_path)
        .with_context(|| format!("failed to open {}", image_path.display()))?
        .with_guessed_format()
        .with_context(|| format!("failed to probe the format of {}", image_path.display()))?
        .decode()
        .with_context(|| format!("failed to decode {}", image_path.display()))?;

    let (width, height) = src.dimensions();
    let image_size = Dims::new(width, height);
    ensure!(valid_input(image_size, tile_size, ordering), InvalidInput);

    let grid = Grid::new(image_size, tile_size);
    let mut canvas = DynamicImage::new(width, height, src.color());

    for (slot, &target) in ordering.iter().enumerate() {
        let from = grid.pos_of(target);
        let to = grid.pos_of(slot as u32);
        let tile = src.view(
            from.x * tile_size.width,
            from.y * tile_size.height,
            tile_size.width,
            tile_size.height,
        );
        canvas.copy_from(
            &*tile,
            to.x * tile_size.width,
            to.y * tile_size.height,
        )?;
    }

    let out_path = out_path.as_ref();
    canvas
        .save(out_path)
        .with_context(|| format!("failed to save {}", out_path.display()))?;
    Ok(())
}
