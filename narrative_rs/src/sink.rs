//! Presentation sinks: ordered, append-only receivers of rendered sections.

use narrative_leptos::types::{Block, BlockContent, ChartFigure, ImageBlock, TextBlock};

use crate::error::Result;

/// Receives rendered sections in declaration order.
pub trait ReportSink {
    fn append_text(&mut self, number: usize, title: Option<&str>, text: TextBlock) -> Result<()>;

    fn append_chart(&mut self, number: usize, title: Option<&str>, chart: ChartFigure)
    -> Result<()>;

    fn append_image(&mut self, number: usize, title: Option<&str>, image: ImageBlock)
    -> Result<()>;
}

/// Collects blocks in memory, for the HTML and JSON writers.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BlockSink {
    blocks: Vec<Block>,
}

impl BlockSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    fn push(&mut self, number: usize, title: Option<&str>, content: BlockContent) {
        self.blocks.push(Block {
            number,
            title: title.map(str::to_string),
            content,
        });
    }
}

impl ReportSink for BlockSink {
    fn append_text(&mut self, number: usize, title: Option<&str>, text: TextBlock) -> Result<()> {
        self.push(number, title, BlockContent::Text(text));
        Ok(())
    }

    fn append_chart(
        &mut self,
        number: usize,
        title: Option<&str>,
        chart: ChartFigure,
    ) -> Result<()> {
        self.push(number, title, BlockContent::Chart(chart));
        Ok(())
    }

    fn append_image(
        &mut self,
        number: usize,
        title: Option<&str>,
        image: ImageBlock,
    ) -> Result<()> {
        self.push(number, title, BlockContent::Image(image));
        Ok(())
    }
}

/// Discards everything; only counts what it was given.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NullSink {
    pub appended: usize,
}

impl ReportSink for NullSink {
    fn append_text(&mut self, _: usize, _: Option<&str>, _: TextBlock) -> Result<()> {
        self.appended += 1;
        Ok(())
    }

    fn append_chart(&mut self, _: usize, _: Option<&str>, _: ChartFigure) -> Result<()> {
        self.appended += 1;
        Ok(())
    }

    fn append_image(&mut self, _: usize, _: Option<&str>, _: ImageBlock) -> Result<()> {
        self.appended += 1;
        Ok(())
    }
}
