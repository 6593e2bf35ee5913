use crate::models::prompt::PromptMessages;
use crate::models::trip::TripRequest;
use crate::services::catalog_renderer::RenderedSections;

pub const SYSTEM_INSTRUCTION: &str =
    "คุณคือผู้ช่วยวางแผนเที่ยวที่ใช้เฉพาะข้อมูลจาก Supabase ที่ให้ไว้เท่านั้น ห้ามแต่งเพิ่มเอง";

pub fn build(request: &TripRequest, sections: &RenderedSections) -> PromptMessages {
    let user = format!(
        "วางแผนเที่ยว **{province}** แบบ **{style}** จำนวน **{days} วัน** ด้วยงบประมาณระดับ **{budget}**\n\
         \n\
         ✅ ใช้เฉพาะจากรายการเหล่านี้เท่านั้น:\n\
         \n\
         🧭 **กิจกรรม**\n\
         {activities}\n\
         \n\
         🍛 **ร้านอาหาร**\n\
         {restaurants}\n\
         \n\
         🏨 **โรงแรม**\n\
         {hotels}\n\
         \n\
         📌 โปรดแบ่งแผนเป็น **เช้า / บ่าย / เย็น** สำหรับแต่ละวัน\n\
         📌 ห้ามเพิ่มสถานที่หรือกิจกรรมอื่นนอกเหนือจากนี้\n\
         📌 สรุปแผนให้อ่านง่าย",
        province = request.province,
        style = request.style,
        days = request.days,
        budget = request.budget,
        activities = sections.activities,
        restaurants = sections.restaurants,
        hotels = sections.hotels,
    );

    PromptMessages {
        system: SYSTEM_INSTRUCTION.to_string(),
        user,
    }
}
