//! Layout document model.
//!
//! The parser API returns a flat list of layout blocks in reading order.
//! [`Document`] keeps that list as-is and derives hierarchical views from the
//! header levels: which headers enclose a block, which blocks are content
//! chunks, which are tables.
//!
//! ## Header nesting
//!
//! Headers carry a `level` (0 = outermost). Walking the blocks in order with
//! a stack of open headers, a header at level `L` closes every open header at
//! level `≥ L` and then opens itself. Any other block belongs to whatever
//! headers are open when it is reached.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of a layout block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockTag {
    Header,
    Para,
    ListItem,
    Table,
    /// Any tag this crate does not model; the raw tag is kept.
    Other(String),
}

impl From<String> for BlockTag {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "header" => BlockTag::Header,
            "para" => BlockTag::Para,
            "list_item" => BlockTag::ListItem,
            "table" => BlockTag::Table,
            _ => BlockTag::Other(tag),
        }
    }
}

impl From<BlockTag> for String {
    fn from(tag: BlockTag) -> Self {
        match tag {
            BlockTag::Header => "header".into(),
            BlockTag::Para => "para".into(),
            BlockTag::ListItem => "list_item".into(),
            BlockTag::Table => "table".into(),
            BlockTag::Other(s) => s,
        }
    }
}

/// One cell of a table header or data row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub cell_value: Value,
}

/// A table row as emitted by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableRow {
    /// Column headings.
    TableHeader {
        #[serde(default)]
        cells: Vec<TableCell>,
    },
    /// Regular row with one entry per column.
    TableDataRow {
        #[serde(default)]
        cells: Vec<TableCell>,
    },
    /// Row spanning the whole table (captions, group labels).
    FullRow {
        #[serde(default)]
        cell_value: Value,
    },
    /// Row type this crate does not model; renders as nothing.
    #[serde(other)]
    Unknown,
}

impl TableRow {
    /// Render the row as a single line, cells separated by `" | "`.
    pub fn to_text(&self) -> String {
        match self {
            TableRow::TableHeader { cells } | TableRow::TableDataRow { cells } => cells
                .iter()
                .map(|c| value_text(&c.cell_value))
                .collect::<Vec<_>>()
                .join(" | "),
            TableRow::FullRow { cell_value } => value_text(cell_value),
            TableRow::Unknown => String::new(),
        }
    }
}

/// A single layout element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub tag: BlockTag,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub page_idx: usize,
    #[serde(default)]
    pub block_idx: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<[f64; 4]>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sentences: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub table_rows: Vec<TableRow>,
}

impl Block {
    pub fn is_header(&self) -> bool {
        self.tag == BlockTag::Header
    }

    pub fn is_table(&self) -> bool {
        self.tag == BlockTag::Table
    }

    /// Plain-text rendering of the block.
    ///
    /// Tables produce one line per row; everything else joins its sentences
    /// with a single space.
    pub fn to_text(&self) -> String {
        if self.is_table() {
            self.table_rows
                .iter()
                .filter(|r| !matches!(r, TableRow::Unknown))
                .map(TableRow::to_text)
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            self.sentences.join(" ")
        }
    }
}

/// A header together with the headers that enclose it.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    /// Position of the header in [`Document::blocks`].
    pub index: usize,
    pub header: &'a Block,
    /// Enclosing headers, outermost first.
    pub parents: Vec<&'a Block>,
}

impl Section<'_> {
    pub fn title(&self) -> String {
        self.header.to_text()
    }

    /// Titles from the outermost enclosing header down to this one.
    pub fn title_chain(&self) -> Vec<String> {
        self.parents
            .iter()
            .map(|b| b.to_text())
            .chain(std::iter::once(self.title()))
            .collect()
    }
}

/// The parsed layout of a PDF.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Every header block with its enclosing-header chain, in reading order.
    pub fn sections(&self) -> Vec<Section<'_>> {
        let ancestry = self.ancestry();
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_header())
            .map(|(index, header)| Section {
                index,
                header,
                parents: ancestry[index].iter().map(|&i| &self.blocks[i]).collect(),
            })
            .collect()
    }

    /// Content blocks: everything that is not a header.
    pub fn chunks(&self) -> Vec<&Block> {
        self.blocks.iter().filter(|b| !b.is_header()).collect()
    }

    pub fn tables(&self) -> Vec<&Block> {
        self.blocks.iter().filter(|b| b.is_table()).collect()
    }

    /// Text of block `index` prefixed by the titles of its enclosing headers.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn context_text(&self, index: usize) -> Option<String> {
        let block = self.blocks.get(index)?;
        let ancestry = self.ancestry();
        let mut lines: Vec<String> = ancestry[index]
            .iter()
            .map(|&i| self.blocks[i].to_text())
            .collect();
        lines.push(block.to_text());
        Some(lines.join("\n"))
    }

    /// All blocks rendered as text, one block per line group.
    pub fn to_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::to_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// For each block, the indices of the headers open when it is reached.
    fn ancestry(&self) -> Vec<Vec<usize>> {
        let mut open: Vec<usize> = Vec::new();
        let mut out = Vec::with_capacity(self.blocks.len());
        for (i, block) in self.blocks.iter().enumerate() {
            if block.is_header() {
                while open
                    .last()
                    .is_some_and(|&h| self.blocks[h].level >= block.level)
                {
                    open.pop();
                }
                out.push(open.clone());
                open.push(i);
            } else {
                out.push(open.clone());
            }
        }
        out
    }
}

/// Cell values are plain scalars or a nested block carrying `sentences`.
fn value_text(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Object(map) => match map.get("sentences") {
            Some(Value::Array(sentences)) => sentences
                .iter()
                .map(value_text)
                .collect::<Vec<_>>()
                .join(" "),
            _ => v.to_string(),
        },
        other => other.to_string(),
    }
}
