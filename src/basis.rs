/// `Dims` は画像やタイルの大きさをピクセル単位の幅と高さで表す.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct Dims {
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl std::fmt::Debug for Dims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Dims {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
