use std::fmt;

/// Block code stored in a chunk grid. The byte value is the only voxel
/// attribute a chunk keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BlockType {
    #[default]
    Air = 0,
    Grass = 1,
    Stone = 2,
    Sand = 3,
    Water = 4,
}

impl BlockType {
    pub const COUNT: usize = 5;
    pub const ALL: [BlockType; Self::COUNT] = [
        BlockType::Air,
        BlockType::Grass,
        BlockType::Stone,
        BlockType::Sand,
        BlockType::Water,
    ];

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decodes a stored byte; unknown codes read as air.
    #[inline]
    pub const fn from_code(code: u8) -> BlockType {
        match code {
            1 => BlockType::Grass,
            2 => BlockType::Stone,
            3 => BlockType::Sand,
            4 => BlockType::Water,
            _ => BlockType::Air,
        }
    }

    #[inline]
    pub const fn is_air(self) -> bool {
        matches!(self, BlockType::Air)
    }

    /// Per-vertex alpha used for faces of this block.
    #[inline]
    pub const fn alpha(self) -> f32 {
        match self {
            BlockType::Water => 0.5,
            _ => 1.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BlockType::Air => "air",
            BlockType::Grass => "grass",
            BlockType::Stone => "stone",
            BlockType::Sand => "sand",
            BlockType::Water => "water",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which side of a block a face belongs to, for texture selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceRole {
    Top,
    Bottom,
    Side,
}
