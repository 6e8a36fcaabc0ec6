use lopdf::content::Content;
use lopdf::{Dictionary, Object, ObjectId, Stream, dictionary};
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};

/// Writes a PDF incrementally and keeps the cross-reference table itself.
pub struct StreamingPdfWriter<W: Write + Seek> {
    writer: W,
    offsets: BTreeMap<u32, u64>,
    max_id: u32,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    pub info_id: ObjectId,
    page_ids: Vec<ObjectId>,
    buffered_objects: BTreeMap<ObjectId, Object>,
}

impl<W: Write + Seek> StreamingPdfWriter<W> {
    pub fn new(mut writer: W, version: &str, font_dict: Dictionary, info: Dictionary) -> io::Result<Self> {
        writer.write_all(format!("%PDF-{}\n%âãÏÓ\n", version).as_bytes())?;

        let resources_id = (1, 0);
        let pages_id = (2, 0);
        let catalog_id = (3, 0);
        let info_id = (4, 0);

        let mut buffered_objects = BTreeMap::new();
        buffered_objects.insert(resources_id, dictionary! { "Font" => font_dict }.into());
        buffered_objects.insert(info_id, info.into());

        Ok(Self {
            writer,
            offsets: BTreeMap::new(),
            max_id: 4,
            catalog_id,
            pages_id,
            resources_id,
            info_id,
            page_ids: Vec::new(),
            buffered_objects,
        })
    }

    pub fn new_object_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    /// Writes an object immediately under a fresh id.
    pub fn write_object(&mut self, object: Object) -> io::Result<ObjectId> {
        let id = self.new_object_id();
        internal_writer::write_indirect_object(&mut self.writer, id, &object, &mut self.offsets)?;
        Ok(id)
    }

    pub fn write_content_stream(&mut self, content: Content) -> io::Result<ObjectId> {
        let encoded = content.encode().map_err(|e| io::Error::other(e.to_string()))?;
        self.write_object(Object::Stream(Stream::new(dictionary! {}, encoded)))
    }

    pub fn buffer_object_at_id(&mut self, id: ObjectId, object: Object) {
        if id.0 > self.max_id {
            self.max_id = id.0;
        }
        self.buffered_objects.insert(id, object);
    }

    pub fn add_page_id(&mut self, page_id: ObjectId) {
        self.page_ids.push(page_id);
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn finish(mut self) -> io::Result<W> {
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.buffer_object_at_id(self.pages_id, pages_dict.into());
        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        self.buffer_object_at_id(self.catalog_id, catalog_dict.into());

        for (id, object) in std::mem::take(&mut self.buffered_objects) {
            internal_writer::write_indirect_object(&mut self.writer, id, &object, &mut self.offsets)?;
        }

        let xref_start = self.writer.stream_position()?;
        let size = self.max_id + 1;
        internal_writer::write_xref(&mut self.writer, &self.offsets, size)?;

        let trailer = dictionary! {
            "Size" => size as i64,
            "Root" => self.catalog_id,
            "Info" => self.info_id,
        };
        writeln!(self.writer, "trailer")?;
        internal_writer::write_dictionary(&mut self.writer, &trailer)?;
        writeln!(self.writer, "\nstartxref")?;
        writeln!(self.writer, "{}", xref_start)?;
        writeln!(self.writer, "%%EOF")?;

        self.writer.flush()?;
        log::debug!("Finished PDF with {} page(s), {} objects", self.page_ids.len(), self.max_id);
        Ok(self.writer)
    }
}

mod internal_writer {
    use super::*;
    use lopdf::StringFormat;

    pub fn write_indirect_object<W: Write + Seek>(
        writer: &mut W,
        id: ObjectId,
        object: &Object,
        offsets: &mut BTreeMap<u32, u64>,
    ) -> io::Result<()> {
        let offset = writer.stream_position()?;
        offsets.insert(id.0, offset);
        writeln!(writer, "{} {} obj", id.0, id.1)?;
        write_object(writer, object)?;
        writeln!(writer, "\nendobj")?;
        Ok(())
    }

    pub fn write_object(writer: &mut dyn Write, object: &Object) -> io::Result<()> {
        match object {
            Object::Null => writer.write_all(b"null"),
            Object::Boolean(b) => writer.write_all(if *b { b"true" } else { b"false" }),
            Object::Integer(i) => write!(writer, "{}", i),
            Object::Real(r) => write!(writer, "{:.3}", r),
            Object::Name(n) => {
                writer.write_all(b"/")?;
                writer.write_all(n)
            }
            Object::String(s, format) => match format {
                StringFormat::Literal => {
                    writer.write_all(b"(")?;
                    for &byte in s {
                        match byte {
                            b'(' | b')' | b'\\' => writer.write_all(&[b'\\', byte])?,
                            b'\n' => writer.write_all(b"\\n")?,
                            b'\r' => writer.write_all(b"\\r")?,
                            _ => writer.write_all(&[byte])?,
                        }
                    }
                    writer.write_all(b")")
                }
                StringFormat::Hexadecimal => {
                    write!(writer, "<{}>", s.iter().map(|b| format!("{:02X}", b)).collect::<String>())
                }
            },
            Object::Array(arr) => {
                writer.write_all(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        writer.write_all(b" ")?;
                    }
                    write_object(writer, obj)?;
                }
                writer.write_all(b"]")
            }
            Object::Dictionary(dict) => write_dictionary(writer, dict),
            Object::Stream(stream) => {
                let mut dict = stream.dict.clone();
                dict.set("Length", stream.content.len() as i64);
                write_dictionary(writer, &dict)?;
                writer.write_all(b"\nstream\n")?;
                writer.write_all(&stream.content)?;
                writer.write_all(b"\nendstream")
            }
            Object::Reference(id) => write!(writer, "{} {} R", id.0, id.1),
        }
    }

    pub fn write_dictionary(writer: &mut dyn Write, dict: &Dictionary) -> io::Result<()> {
        writer.write_all(b"<<")?;
        let sorted_keys: BTreeMap<_, _> = dict.iter().collect();
        for (key, value) in sorted_keys {
            writer.write_all(b"/")?;
            writer.write_all(key)?;
            writer.write_all(b" ")?;
            write_object(writer, value)?;
            writer.write_all(b" ")?;
        }
        writer.write_all(b">>")
    }

    /// One subsection covering ids `0..size`; ids never written are free.
    pub fn write_xref<W: Write>(writer: &mut W, offsets: &BTreeMap<u32, u64>, size: u32) -> io::Result<()> {
        writeln!(writer, "xref")?;
        writeln!(writer, "0 {}", size)?;
        writer.write_all(b"0000000000 65535 f \n")?;
        for id in 1..size {
            match offsets.get(&id) {
                Some(offset) => write!(writer, "{:010} 00000 n \n", offset)?,
                None => writer.write_all(b"0000000000 00000 f \n")?,
            }
        }
        Ok(())
    }
}
