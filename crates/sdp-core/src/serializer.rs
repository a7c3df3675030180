//! SDP text rendering
//!
//! Writes a [`SessionDescription`] back to wire form. Lines come out in
//! the order RFC 8866 section 5 prescribes, every one terminated by CRLF,
//! with attributes in stored order. Field values are written as stored,
//! so whatever the parser accepted renders back to something it accepts
//! again.

use std::fmt::{self, Write};

use crate::types::{MediaDescription, SessionDescription, TimeDescription};

/// Renders `session` as SDP text
///
/// # Examples
///
/// ```
/// use rvoip_sdp_core::{parse, serialize};
///
/// let text = "v=0\r\n\
/// o=- 1 1 IN IP4 127.0.0.1\r\n\
/// s=-\r\n\
/// t=0 0\r\n\
/// a=x-custom:foo\r\n";
///
/// assert_eq!(serialize(&parse(text).unwrap()), text);
/// ```
pub fn serialize(session: &SessionDescription) -> String {
    let mut out = String::new();
    // Writing into a String never fails
    let _ = write_session(&mut out, session);
    out
}

fn line(out: &mut impl Write, line_type: char, value: impl fmt::Display) -> fmt::Result {
    write!(out, "{}={}\r\n", line_type, value)
}

fn write_time(out: &mut impl Write, time: &TimeDescription) -> fmt::Result {
    write!(out, "t={} {}\r\n", time.start_time, time.stop_time)?;
    for repeat in &time.repeat_times {
        line(out, 'r', repeat)?;
    }
    Ok(())
}

fn write_media(out: &mut impl Write, media: &MediaDescription) -> fmt::Result {
    write!(out, "m={} {}", media.media, media.port)?;
    if let Some(count) = media.port_count {
        write!(out, "/{}", count)?;
    }
    write!(out, " {}", media.protocol)?;
    for format in &media.formats {
        write!(out, " {}", format)?;
    }
    out.write_str("\r\n")?;

    if let Some(title) = &media.title {
        line(out, 'i', title)?;
    }
    if let Some(connection) = &media.connection {
        line(out, 'c', connection)?;
    }
    for bandwidth in &media.bandwidths {
        line(out, 'b', bandwidth)?;
    }
    if let Some(key) = &media.encryption_key {
        line(out, 'k', key)?;
    }
    for attribute in &media.attributes {
        line(out, 'a', attribute)?;
    }
    Ok(())
}

/// Writes the full session, shared by [`serialize`] and the `Display` impl
pub(crate) fn write_session(out: &mut impl Write, session: &SessionDescription) -> fmt::Result {
    line(out, 'v', session.version)?;
    line(out, 'o', &session.origin)?;
    line(out, 's', &session.session_name)?;
    if let Some(info) = &session.session_info {
        line(out, 'i', info)?;
    }
    if let Some(uri) = &session.uri {
        line(out, 'u', uri)?;
    }
    for email in &session.emails {
        line(out, 'e', email)?;
    }
    for phone in &session.phones {
        line(out, 'p', phone)?;
    }
    if let Some(connection) = &session.connection {
        line(out, 'c', connection)?;
    }
    for bandwidth in &session.bandwidths {
        line(out, 'b', bandwidth)?;
    }
    for time in &session.time_descriptions {
        write_time(out, time)?;
    }
    if !session.time_zones.is_empty() {
        out.write_str("z=")?;
        for (i, adjustment) in session.time_zones.iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            write!(out, "{}", adjustment)?;
        }
        out.write_str("\r\n")?;
    }
    if let Some(key) = &session.encryption_key {
        line(out, 'k', key)?;
    }
    for attribute in &session.attributes {
        line(out, 'a', attribute)?;
    }

    for media in &session.media_descriptions {
        write_media(out, media)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use crate::types::{
        Attribute, ConnectionData, MediaDirection, Origin, RepeatTime, TimeUnit,
        TimeZoneAdjustment, TypedTime,
    };

    fn origin() -> Origin {
        Origin {
            username: "jdoe".to_string(),
            session_id: 2890844526,
            session_version: 2890842807,
            net_type: "IN".to_string(),
            addr_type: "IP4".to_string(),
            unicast_address: "10.47.16.5".to_string(),
        }
    }

    #[test]
    fn test_serialize_built_session() {
        let session = SessionDescription::new(origin(), "SDP Seminar")
            .with_connection(ConnectionData::new("IP4", "10.47.16.5"))
            .with_attribute(Attribute::Direction(MediaDirection::RecvOnly))
            .with_media(
                MediaDescription::new("audio", 49170, "RTP/AVP", vec!["0".to_string()])
                    .with_attribute(Attribute::Ptime(20)),
            );

        assert_eq!(
            serialize(&session),
            "v=0\r\n\
             o=jdoe 2890844526 2890842807 IN IP4 10.47.16.5\r\n\
             s=SDP Seminar\r\n\
             c=IN IP4 10.47.16.5\r\n\
             t=0 0\r\n\
             a=recvonly\r\n\
             m=audio 49170 RTP/AVP 0\r\n\
             a=ptime:20\r\n"
        );
    }

    #[test]
    fn test_rfc_line_order() {
        let mut session = SessionDescription::new(origin(), "-");
        session.encryption_key = Some("prompt".to_string());
        session.attributes.push(Attribute::IceLite);
        session.time_zones = vec![
            TimeZoneAdjustment {
                adjustment_time: 2882844526,
                offset: TypedTime { amount: -1, unit: Some(TimeUnit::Hours) },
            },
            TimeZoneAdjustment {
                adjustment_time: 2898848070,
                offset: TypedTime::seconds(0),
            },
        ];
        session.time_descriptions[0].repeat_times.push(RepeatTime {
            interval: TypedTime { amount: 7, unit: Some(TimeUnit::Days) },
            active_duration: TypedTime { amount: 1, unit: Some(TimeUnit::Hours) },
            offsets: vec![TypedTime::seconds(0), TypedTime { amount: 25, unit: Some(TimeUnit::Hours) }],
        });
        session.emails.push("j.doe@example.com".to_string());
        session.uri = Some("http://www.example.com/seminars/sdp.pdf".to_string());

        let types: String = serialize(&session)
            .split("\r\n")
            .filter(|l| !l.is_empty())
            .map(|l| &l[..1])
            .collect();
        assert_eq!(types, "vosuetrzka");
    }

    #[test]
    fn test_media_line_with_port_count() {
        let mut media = MediaDescription::new("video", 49170, "RTP/AVP", vec!["31".to_string()]);
        media.port_count = Some(2);
        media.title = Some("main camera".to_string());
        let session = SessionDescription::new(origin(), "-").with_media(media);

        let text = serialize(&session);
        assert!(text.ends_with("m=video 49170/2 RTP/AVP 31\r\ni=main camera\r\n"));
    }

    #[test]
    fn test_display_matches_serialize() {
        let session = parse(
            "v=0\no=- 1 1 IN IP4 127.0.0.1\ns=-\nt=0 0\nm=audio 9 RTP/AVP 0\na=sendrecv\n",
        )
        .unwrap();
        assert_eq!(session.to_string(), serialize(&session));
        assert!(serialize(&session).ends_with("a=sendrecv\r\n"));
    }
}
