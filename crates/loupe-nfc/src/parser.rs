pub mod stream;

use stream::Stream;
use winnow::{
    ModalResult, Parser,
    binary::{
        Endianness, be_u8, be_u16,
        bits::{bits, bool as take_bool, take as take_bits},
    },
    error::{ContextError, ErrMode},
    token::{any, literal, take},
};

use crate::{
    header::NdefHeader,
    message_info::MessageInfo,
    ndef_type::NdefType,
    payload::{NdefPayload, TextPayload, TextPayloadFormat, expand_uri_prefix},
    record::NdefRecord,
};

/// TLV tag that frames an NDEF message on a Type 2 tag
const NDEF_MESSAGE_TLV: u8 = 0x03;

/// Length indicator escape: the real length follows as a big endian u16
const LONG_LENGTH_MARKER: u8 = 0xFF;

/// Decode the TLV framing in front of the message body.
pub fn parse_message_header(input: &mut Stream<'_>) -> ModalResult<MessageInfo> {
    let _ = literal([NDEF_MESSAGE_TLV]).parse_next(input)?;
    let length_indicator = be_u8.parse_next(input)?;

    if length_indicator == LONG_LENGTH_MARKER {
        let payload_length = be_u16.parse_next(input)?;
        Ok(MessageInfo::new(4, payload_length))
    } else {
        Ok(MessageInfo::new(2, length_indicator as u16))
    }
}

/// Decode records until the framed body length is consumed. The
/// terminator TLV, if any, is left on the stream.
pub fn parse_ndef_records(
    input: &mut Stream<'_>,
    info: &MessageInfo,
) -> ModalResult<Vec<NdefRecord>> {
    let body_length = info.payload_length as usize;

    let mut records = Vec::new();
    let mut consumed = 0;

    loop {
        let remaining_before = input.len();
        let record = parse_ndef_record.parse_next(input)?;
        records.push(record);

        consumed += remaining_before - input.len();
        if consumed >= body_length && !records.is_empty() {
            break;
        }
    }

    Ok(records)
}

pub fn parse_ndef_record(input: &mut Stream<'_>) -> ModalResult<NdefRecord> {
    let header = parse_header.parse_next(input)?;
    let type_bytes = parse_type(input, header.type_length)?;
    let id = parse_id(input, header.id_length)?;
    let payload = parse_payload(input, header.payload_length, &type_bytes)?;

    Ok(NdefRecord {
        header,
        type_bytes,
        id,
        payload,
    })
}

// private

fn parse_flags_byte(input: &mut Stream<'_>) -> ModalResult<(bool, bool, bool, bool, bool, u8)> {
    bits::<_, _, ErrMode<ContextError>, _, _>((
        take_bool,
        take_bool,
        take_bool,
        take_bool,
        take_bool,
        take_bits(3_u8),
    ))
    .parse_next(input)
}

fn parse_header(input: &mut Stream<'_>) -> ModalResult<NdefHeader> {
    let (message_begin, message_end, chunked, short_record, has_id_length, tnf_bits) =
        parse_flags_byte.parse_next(input)?;

    // 3 bit field, from_bits is total over it
    let type_name_format = NdefType::from_bits(tnf_bits).unwrap_or(NdefType::Reserved);

    let type_length = be_u8.parse_next(input)?;

    let payload_length = if short_record {
        be_u8.map(u32::from).parse_next(input)?
    } else {
        winnow::binary::u32(Endianness::Big).parse_next(input)?
    };

    let id_length = if has_id_length {
        Some(be_u8.parse_next(input)?)
    } else {
        None
    };

    Ok(NdefHeader {
        message_begin,
        message_end,
        chunked,
        short_record,
        has_id_length,
        type_name_format,
        type_length,
        payload_length,
        id_length,
    })
}

fn parse_type(input: &mut Stream<'_>, type_length: u8) -> ModalResult<Vec<u8>> {
    take(type_length as usize)
        .map(|bytes: &[u8]| bytes.to_vec())
        .parse_next(input)
}

fn parse_id(input: &mut Stream<'_>, id_length: Option<u8>) -> ModalResult<Option<Vec<u8>>> {
    match id_length {
        Some(id_length) => take(id_length as usize)
            .map(|bytes: &[u8]| Some(bytes.to_vec()))
            .parse_next(input),
        None => Ok(None),
    }
}

fn parse_payload(
    input: &mut Stream<'_>,
    payload_length: u32,
    type_bytes: &[u8],
) -> ModalResult<NdefPayload> {
    if payload_length == 0 {
        return Ok(NdefPayload::Data(Vec::new()));
    }

    match type_bytes {
        b"T" => parse_text_payload(input, payload_length),
        b"U" => parse_uri_payload(input, payload_length),
        _ => take(payload_length as usize)
            .map(|bytes: &[u8]| NdefPayload::Data(bytes.to_vec()))
            .parse_next(input),
    }
}

fn parse_text_payload(input: &mut Stream<'_>, payload_length: u32) -> ModalResult<NdefPayload> {
    let (is_utf16, language_code_length): (bool, u8) =
        bits::<_, _, ErrMode<ContextError>, _, _>((take_bool, take_bits(7_u8)))
            .parse_next(input)?;

    // a status byte claiming more language bytes than the payload holds is
    // not decodable as text, keep the payload raw
    let Some(text_length) = (payload_length - 1).checked_sub(language_code_length as u32) else {
        let rest = take((payload_length - 1) as usize).parse_next(input)?;

        let status_byte = (u8::from(is_utf16) << 7) | language_code_length;
        let mut data = Vec::with_capacity(payload_length as usize);
        data.push(status_byte);
        data.extend_from_slice(rest);

        return Ok(NdefPayload::Data(data));
    };

    let language_code = take(language_code_length as usize).parse_next(input)?;
    let text = take(text_length as usize).parse_next(input)?;

    let decoded = if is_utf16 {
        String::from_utf16_lossy(
            &text
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect::<Vec<u16>>(),
        )
    } else {
        String::from_utf8_lossy(text).to_string()
    };

    Ok(NdefPayload::Text(TextPayload {
        format: if is_utf16 {
            TextPayloadFormat::Utf16
        } else {
            TextPayloadFormat::Utf8
        },
        language: String::from_utf8_lossy(language_code).to_string(),
        text: decoded,
    }))
}

fn parse_uri_payload(input: &mut Stream<'_>, payload_length: u32) -> ModalResult<NdefPayload> {
    let prefix_code: u8 = any.parse_next(input)?;
    let rest = take((payload_length - 1) as usize).parse_next(input)?;

    let prefix = expand_uri_prefix(prefix_code);
    let mut uri = String::with_capacity(prefix.len() + rest.len());
    uri.push_str(prefix);
    uri.push_str(&String::from_utf8_lossy(rest));

    Ok(NdefPayload::Uri(uri))
}
