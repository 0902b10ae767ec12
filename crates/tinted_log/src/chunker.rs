use crate::config::ChunkWidth;

/// Splits `message` into consecutive pieces of at most `width` characters.
///
/// Widths count `char`s, so a piece never ends inside a code point. The
/// pieces concatenate back to `message`; none of them is empty, except for the
/// single piece an empty message yields.
pub fn chunk_message(message: &str, width: ChunkWidth) -> Vec<&str> {
    let width = match width {
        ChunkWidth::Limited(width) => width.get(),
        ChunkWidth::Unbounded => return vec![message],
    };

    let mut chunks = Vec::with_capacity(message.len() / width + 1);
    let mut start = 0;

    for (count, (index, _)) in message.char_indices().enumerate() {
        if count > 0 && count % width == 0 {
            chunks.push(&message[start..index]);
            start = index;
        }
    }

    chunks.push(&message[start..]);
    chunks
}
