//! Binary trie persistence: the STR1 format.
//!
//! A persisted trie is a single self-contained blob, opaque to callers and
//! round-trippable only by this implementation.
//!
//! ## Binary layout
//!
//! ```text
//! [magic: 4B "STR1"]
//! [alpha_lo: u32] [alpha_hi: u32]     // inclusive code-point range
//! [node_count: u32] [key_count: u32]
//! node records × node_count:          // record 0 is the root
//!   [flags: u8]                       // bit 0 = terminal
//!   [child_count: varint]
//!   child_count × [symbol: varint] [child_index: varint]
//! ```
//!
//! All fixed-width integers are little-endian; varints are LEB128. Child
//! symbols within a record are strictly ascending. Encoding compacts the
//! arena: only nodes reachable from the root are emitted, re-indexed densely
//! in BFS order, so free-list garbage never reaches disk.
//!
//! File writes go through a temp sibling + rename, so a failed save never
//! leaves a partial file behind at the target path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::alpha::{AlphaMap, Symbol};
use crate::trie::{Node, NodeId, Trie, ROOT};

/// Magic bytes for a persisted trie file.
pub const TRIE_MAGIC: [u8; 4] = *b"STR1";

/// Header size: magic (4) + alpha range (8) + node_count (4) + key_count (4).
const HEADER_SIZE: usize = 20;

const FLAG_TERMINAL: u8 = 0x01;

// ============================================================================
// Encode
// ============================================================================

/// Encode a trie (and the alphabet it was built against) into an STR1 blob.
pub fn encode_trie(trie: &Trie, alpha: &AlphaMap) -> Vec<u8> {
    // BFS over reachable nodes, assigning dense on-disk indices in visit
    // order. Root lands at index 0.
    let mut remap: Vec<u32> = vec![u32::MAX; trie.arena_len()];
    let mut order: Vec<NodeId> = vec![ROOT];
    remap[ROOT.0 as usize] = 0;
    let mut head = 0;
    while head < order.len() {
        let id = order[head];
        head += 1;
        for &(_, child) in &trie.node(id).children {
            if remap[child.0 as usize] == u32::MAX {
                remap[child.0 as usize] = order.len() as u32;
                order.push(child);
            }
        }
    }

    let (lo, hi) = alpha.range();
    let mut buf = Vec::with_capacity(HEADER_SIZE + order.len() * 4);
    buf.extend_from_slice(&TRIE_MAGIC);
    buf.extend_from_slice(&lo.to_le_bytes());
    buf.extend_from_slice(&hi.to_le_bytes());
    buf.extend_from_slice(&(order.len() as u32).to_le_bytes());
    buf.extend_from_slice(&(trie.len() as u32).to_le_bytes());

    for &id in &order {
        let node = trie.node(id);
        let flags = if node.terminal { FLAG_TERMINAL } else { 0 };
        buf.push(flags);
        encode_varint(node.children.len() as u64, &mut buf);
        for &(sym, child) in &node.children {
            encode_varint(sym.as_u32() as u64, &mut buf);
            encode_varint(remap[child.0 as usize] as u64, &mut buf);
        }
    }

    buf
}

// ============================================================================
// Decode
// ============================================================================

/// Decode an STR1 blob back into an alphabet + trie.
///
/// Truncation, bad magic, unsorted child tables, out-of-range indices or
/// symbols, a terminal root, and trailing bytes are all `InvalidData`.
pub fn decode_trie(data: &[u8]) -> io::Result<(AlphaMap, Trie)> {
    if data.len() < HEADER_SIZE {
        return Err(invalid("trie blob too small for header"));
    }
    if data[0..4] != TRIE_MAGIC {
        return Err(invalid("trie blob: invalid magic"));
    }
    let lo = u32::from_le_bytes(data[4..8].try_into().unwrap());
    let hi = u32::from_le_bytes(data[8..12].try_into().unwrap());
    let node_count = u32::from_le_bytes(data[12..16].try_into().unwrap()) as usize;
    let key_count = u32::from_le_bytes(data[16..20].try_into().unwrap()) as usize;

    let alpha = AlphaMap::with_range(lo, hi)
        .ok_or_else(|| invalid("trie blob: inverted alphabet range"))?;
    if node_count == 0 {
        return Err(invalid("trie blob: zero node count"));
    }
    // Every node record is at least 2 bytes (flags + child count), so a
    // count beyond that is truncation, not something to pre-allocate for.
    if node_count > (data.len() - HEADER_SIZE) / 2 + 1 {
        return Err(invalid("trie blob: node count exceeds remaining bytes"));
    }
    let symbol_span = (hi - lo) as u64;

    let mut nodes = Vec::with_capacity(node_count);
    let mut terminals = 0usize;
    let mut pos = HEADER_SIZE;
    for _ in 0..node_count {
        if pos >= data.len() {
            return Err(invalid("trie blob: truncated node record"));
        }
        let flags = data[pos];
        pos += 1;
        let terminal = flags & FLAG_TERMINAL != 0;
        if terminal {
            terminals += 1;
        }

        let child_count = decode_varint(data, &mut pos)?;
        // Each child is at least 2 bytes (symbol + index varints).
        if child_count > ((data.len() - pos) / 2) as u64 {
            return Err(invalid("trie blob: child count exceeds remaining bytes"));
        }
        let mut children: Vec<(Symbol, NodeId)> = Vec::with_capacity(child_count as usize);
        let mut prev: Option<u64> = None;
        for _ in 0..child_count {
            let sym = decode_varint(data, &mut pos)?;
            let child = decode_varint(data, &mut pos)?;
            if sym > symbol_span {
                return Err(invalid("trie blob: symbol outside alphabet range"));
            }
            if prev.is_some_and(|p| sym <= p) {
                return Err(invalid("trie blob: child symbols out of order"));
            }
            prev = Some(sym);
            if child >= node_count as u64 {
                return Err(invalid("trie blob: child index out of range"));
            }
            children.push((Symbol(sym as u32), NodeId(child as u32)));
        }

        nodes.push(Node { children, terminal });
    }

    if pos != data.len() {
        return Err(invalid("trie blob: trailing bytes after node records"));
    }
    if nodes[0].terminal {
        // An empty key is never stored, so a terminal root cannot be the
        // output of encode_trie.
        return Err(invalid("trie blob: terminal root"));
    }
    if terminals != key_count {
        return Err(invalid("trie blob: key count does not match terminal count"));
    }

    Ok((alpha, Trie::from_parts(nodes, key_count)))
}

fn invalid(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

// ============================================================================
// File I/O
// ============================================================================

/// Write the trie to `path` atomically: encode, write a temp sibling, rename.
pub fn write_trie_file(trie: &Trie, alpha: &AlphaMap, path: &Path) -> io::Result<()> {
    let bytes = encode_trie(trie, alpha);
    let tmp = tmp_sibling(path)?;
    if let Err(e) = fs::write(&tmp, &bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

/// Read and decode a trie file written by [`write_trie_file`].
pub fn read_trie_file(path: &Path) -> io::Result<(AlphaMap, Trie)> {
    decode_trie(&fs::read(path)?)
}

fn tmp_sibling(path: &Path) -> io::Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let mut name = file_name.to_os_string();
    name.push(".tmp");
    Ok(path.with_file_name(name))
}

// ============================================================================
// Varint (LEB128)
// ============================================================================

#[inline]
fn encode_varint(mut value: u64, buf: &mut Vec<u8>) {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        buf.push(byte);
        if value == 0 {
            break;
        }
    }
}

#[inline]
fn decode_varint(buf: &[u8], pos: &mut usize) -> io::Result<u64> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;
    loop {
        if *pos >= buf.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "varint: unexpected end of buffer",
            ));
        }
        let byte = buf[*pos];
        *pos += 1;

        let payload = (byte & 0x7F) as u64;
        // At shift 63 only one payload bit is left, and any continuation
        // would push the next shift past the u64 width.
        if shift >= 63 && (payload > 1 || byte & 0x80 != 0) {
            return Err(invalid("varint overflow"));
        }
        result |= payload << shift;
        if byte & 0x80 == 0 {
            return Ok(result);
        }
        shift += 7;
    }
}
