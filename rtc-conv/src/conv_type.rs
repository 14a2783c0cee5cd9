use std::fmt;

/// The four min-plus / max-plus operators
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConvType {
    /// Min-plus convolution, `inf { a(Δ - s) + b(s) : 0 ≤ s ≤ Δ }`
    MinPlusConv,
    /// Min-plus deconvolution, `sup { a(Δ + s) - b(s) : s ≥ 0 }`
    MinPlusDeconv,
    /// Max-plus convolution, `sup { a(Δ - s) + b(s) : 0 ≤ s ≤ Δ }`
    MaxPlusConv,
    /// Max-plus deconvolution, `inf { a(Δ + s) - b(s) : s ≥ 0 }`
    MaxPlusDeconv,
}

impl ConvType {
    /// Every operator, in declaration order
    pub const ALL: [ConvType; 4] = [
        ConvType::MinPlusConv,
        ConvType::MinPlusDeconv,
        ConvType::MaxPlusConv,
        ConvType::MaxPlusDeconv,
    ];

    /// Whether `a` is mirrored before combining it with `b`, i.e. whether this
    /// is a convolution rather than a deconvolution
    pub const fn mirrors(self) -> bool {
        matches!(self, ConvType::MinPlusConv | ConvType::MaxPlusConv)
    }

    /// Whether the scalar result is a minimum rather than a maximum
    pub const fn computes_min(self) -> bool {
        matches!(self, ConvType::MinPlusConv | ConvType::MaxPlusDeconv)
    }
}

impl fmt::Display for ConvType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConvType::MinPlusConv => "MIN_PLUS_CONV",
            ConvType::MinPlusDeconv => "MIN_PLUS_DECONV",
            ConvType::MaxPlusConv => "MAX_PLUS_CONV",
            ConvType::MaxPlusDeconv => "MAX_PLUS_DECONV",
        };
        f.write_str(name)
    }
}
